// ABOUTME: Helper modules for fitprofile-cli
// ABOUTME: Output formatting shared by the shell and one-shot commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
