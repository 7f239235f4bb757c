// ABOUTME: Display surface for the profile, notified after each committed change
// ABOUTME: Formats "<Label> : <value><unit>" strings; never used as a source of profile values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::profile::{format_bmi, ProfileState};
use fitprofile_core::models::ProfileField;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Slot on the display surface a label is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LabelKey {
    /// One of the seven editable fields
    Field(ProfileField),
    /// Derived body mass index
    Bmi,
}

/// Formatted text for one display slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLabel {
    /// Slot this label belongs to
    pub key: LabelKey,
    /// Rendered label text
    pub text: String,
}

/// Receives formatted labels after a change has been persisted and committed
pub trait ProfileObserver: Send {
    /// Called once per committed update with the labels that changed
    fn profile_changed(&mut self, labels: &[FieldLabel]);
}

impl<T: ProfileObserver> ProfileObserver for Arc<Mutex<T>> {
    fn profile_changed(&mut self, labels: &[FieldLabel]) {
        match self.lock() {
            Ok(mut observer) => observer.profile_changed(labels),
            Err(poisoned) => poisoned.into_inner().profile_changed(labels),
        }
    }
}

/// Render a field label, e.g. `Height : 1.7m`
#[must_use]
pub fn format_field_label(field: ProfileField, value: &str) -> String {
    format!("{} : {value}{}", field.label(), field.unit())
}

/// Render the BMI label, e.g. `BMI : 22.2`
#[must_use]
pub fn format_bmi_label(bmi: f64) -> String {
    format!("BMI : {}", format_bmi(bmi))
}

/// Labels for `changed` fields, plus BMI when height or weight is among them
#[must_use]
pub fn labels_for(state: &ProfileState, changed: &[ProfileField]) -> Vec<FieldLabel> {
    let mut labels: Vec<FieldLabel> = changed
        .iter()
        .filter_map(|field| {
            state.get(*field).map(|value| FieldLabel {
                key: LabelKey::Field(*field),
                text: format_field_label(*field, &value),
            })
        })
        .collect();

    if changed.iter().any(|field| field.affects_bmi()) {
        if let Some(bmi) = state.bmi() {
            labels.push(FieldLabel {
                key: LabelKey::Bmi,
                text: format_bmi_label(bmi),
            });
        }
    }
    labels
}

/// Text panel keeping the latest label for every slot
#[derive(Debug, Clone, Default)]
pub struct ProfilePanel {
    labels: BTreeMap<LabelKey, String>,
}

impl ProfilePanel {
    /// Build a panel showing every field currently set in `state`
    #[must_use]
    pub fn from_state(state: &ProfileState) -> Self {
        let mut panel = Self::default();
        panel.profile_changed(&labels_for(state, &ProfileField::ALL));
        panel
    }

    /// Latest label for a slot
    #[must_use]
    pub fn label(&self, key: LabelKey) -> Option<&str> {
        self.labels.get(&key).map(String::as_str)
    }
}

impl ProfileObserver for ProfilePanel {
    fn profile_changed(&mut self, labels: &[FieldLabel]) {
        for label in labels {
            self.labels.insert(label.key, label.text.clone());
        }
    }
}

impl fmt::Display for ProfilePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str("Profile is empty");
        }
        let mut first = true;
        for text in self.labels.values() {
            if !first {
                writeln!(f)?;
            }
            f.write_str(text)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::validate_field;

    fn state(values: &[(ProfileField, &str)]) -> ProfileState {
        let mut state = ProfileState::new();
        for (field, raw) in values {
            state.set(validate_field(*field, raw).unwrap());
        }
        state.recompute_bmi();
        state
    }

    #[test]
    fn test_label_format() {
        assert_eq!(format_field_label(ProfileField::Height, "1.7"), "Height : 1.7m");
        assert_eq!(format_field_label(ProfileField::Weight, "65"), "Weight : 65kg");
        assert_eq!(format_field_label(ProfileField::Gender, "Male"), "Gender : Male");
        assert_eq!(format_bmi_label(22.2), "BMI : 22.2");
    }

    #[test]
    fn test_bmi_label_follows_height_or_weight() {
        let state = state(&[
            (ProfileField::Height, "1.8"),
            (ProfileField::Weight, "72"),
            (ProfileField::Username, "Alice"),
        ]);
        let labels = labels_for(&state, &[ProfileField::Username]);
        assert_eq!(labels.len(), 1);

        let labels = labels_for(&state, &[ProfileField::Weight]);
        assert_eq!(
            labels.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
            vec!["Weight : 72kg", "BMI : 22.2"]
        );
    }

    #[test]
    fn test_panel_keeps_latest_label() {
        let mut panel = ProfilePanel::from_state(&state(&[(ProfileField::Calories, "200")]));
        assert_eq!(
            panel.label(LabelKey::Field(ProfileField::Calories)),
            Some("Calories : 200kcal")
        );

        let updated = state(&[(ProfileField::Calories, "300")]);
        panel.profile_changed(&labels_for(&updated, &[ProfileField::Calories]));
        assert_eq!(panel.to_string(), "Calories : 300kcal");
    }

    #[test]
    fn test_empty_panel() {
        assert_eq!(ProfilePanel::default().to_string(), "Profile is empty");
    }
}
