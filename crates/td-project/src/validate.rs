//! Document validation logic.
//!
//! Collects every problem in one pass so a user fixing a hand-written
//! file sees the whole list, not one complaint per attempt. The checks
//! here are a superset of what the engine re-asserts on evaluation: a
//! document that passes validation always compiles to a spec the
//! pipeline accepts.

use crate::schema::SpecFile;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_spec(file: &SpecFile) -> Vec<ValidationError> {
    let mut problems = Vec::new();

    check_positive_finite(&mut problems, "power_va", file.power_va);
    check_positive_finite(&mut problems, "primary_voltage_v", file.primary_voltage_v);
    check_positive_finite(&mut problems, "secondary_voltage_v", file.secondary_voltage_v);
    check_positive_finite(&mut problems, "frequency_hz", file.frequency_hz);

    if !file.target_efficiency.is_finite()
        || file.target_efficiency <= 0.0
        || file.target_efficiency >= 1.0
    {
        push_invalid(
            &mut problems,
            "target_efficiency",
            file.target_efficiency,
            "must be in (0, 1)",
        );
    }
    if !file.regulation.is_finite() || file.regulation < 0.0 || file.regulation >= 1.0 {
        push_invalid(&mut problems, "regulation", file.regulation, "must be in [0, 1)");
    }
    if !file.ambient_c.is_finite() || file.ambient_c <= -50.0 || file.ambient_c > 80.0 {
        push_invalid(
            &mut problems,
            "ambient_c",
            file.ambient_c,
            "must be between -50 and 80",
        );
    }
    if !file.altitude_m.is_finite() || file.altitude_m < 0.0 || file.altitude_m >= 9000.0 {
        push_invalid(
            &mut problems,
            "altitude_m",
            file.altitude_m,
            "must be in [0, 9000); the thermal model has no data above that",
        );
    }
    if !file.harmonic_factor.is_finite() || file.harmonic_factor < 1.0 {
        push_invalid(
            &mut problems,
            "harmonic_factor",
            file.harmonic_factor,
            "must be >= 1",
        );
    }

    check_positive_finite(
        &mut problems,
        "limits.max_temp_rise_c",
        file.limits.max_temp_rise_c,
    );
    for (field, cap) in [
        ("limits.max_losses_w", file.limits.max_losses_w),
        ("limits.max_weight_kg", file.limits.max_weight_kg),
        ("limits.max_cost_usd", file.limits.max_cost_usd),
        ("limits.noise_limit_db", file.limits.noise_limit_db),
    ] {
        if let Some(value) = cap {
            check_positive_finite(&mut problems, field, value);
        }
    }

    problems
}

fn check_positive_finite(problems: &mut Vec<ValidationError>, field: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        push_invalid(problems, field, value, "must be positive and finite");
    }
}

fn push_invalid(problems: &mut Vec<ValidationError>, field: &str, value: f64, reason: &str) {
    problems.push(ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    });
}
