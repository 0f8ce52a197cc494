//! Plain-text design report.
//!
//! The section layout follows a conventional design dossier: the input
//! parameters up front, a one-page summary, per-discipline detail, and
//! a numbered methodology walk-through with the substituted arithmetic.

use chrono::Utc;
use td_design::{DesignResult, WindingRecord};
use td_materials::Phase;
use td_models::{DryCooling, MechanicalResult, WindingLayout};
use td_project::SpecFile;

/// Render the full report for one evaluated design.
pub fn render_text(file: &SpecFile, result: &DesignResult) -> String {
    let mut out = String::new();

    let title = "Advanced Transformer Design Report";
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");

    if !file.name.is_empty() {
        out.push_str(&format!("Project: {}\n", file.name));
    }
    out.push_str(&format!(
        "Date: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!(
        "Design Standard: {}\n",
        file.standard.display_name()
    ));

    project_information(&mut out, file);
    electrical_parameters(&mut out, file, result);
    environmental_parameters(&mut out, file);
    design_summary(&mut out, result);
    core_details(&mut out, file, result);
    winding_details(&mut out, file, result);
    loss_analysis(&mut out, result);
    thermal_analysis(&mut out, file, result);
    mechanical_design(&mut out, result);
    dynamic_performance(&mut out, result);
    cost_analysis(&mut out, result);
    methodology(&mut out, file, result);

    out
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');
}

fn row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<28}{}\n", label, value));
}

fn project_information(out: &mut String, file: &SpecFile) {
    section(out, "Project Information");
    row(out, "Transformer Type:", file.transformer_type.display_name());
    row(out, "Core Material:", file.core_material.display_name());
    row(out, "Cooling Type:", file.cooling.display_name());
    row(out, "Phase Configuration:", file.phase.display_name());
    row(out, "Core Shape:", file.core_shape.display_name());
    row(out, "Winding Type:", file.winding_type.display_name());
    if file.phase == Phase::Three {
        row(out, "Connection Type:", file.connection.display_name());
    }
}

fn electrical_parameters(out: &mut String, file: &SpecFile, result: &DesignResult) {
    section(out, "Electrical Parameters");
    row(out, "Primary Voltage:", &format!("{} V", file.primary_voltage_v));
    row(
        out,
        "Secondary Voltage:",
        &format!("{} V", file.secondary_voltage_v),
    );
    row(out, "Frequency:", &format!("{} Hz", file.frequency_hz));
    row(out, "Power Rating:", &format!("{} VA", file.power_va));
    row(
        out,
        "Target Efficiency:",
        &format!("{:.1}%", file.target_efficiency * 100.0),
    );
    row(out, "Regulation:", &format!("{:.1}%", file.regulation * 100.0));
    row(
        out,
        "Flux Density:",
        &format!("{:.2} T", result.flux_density_t),
    );
    row(
        out,
        "Current Density:",
        &format!("{:.2} A/mm²", result.current_density_a_mm2),
    );
}

fn environmental_parameters(out: &mut String, file: &SpecFile) {
    section(out, "Environmental Parameters");
    row(out, "Ambient Temperature:", &format!("{} °C", file.ambient_c));
    row(
        out,
        "Maximum Temperature Rise:",
        &format!("{} °C", file.limits.max_temp_rise_c),
    );
    row(out, "Altitude:", &format!("{} m", file.altitude_m));
    row(out, "Harmonic Factor:", &format!("{}", file.harmonic_factor));
    if let Some(db) = file.limits.noise_limit_db {
        row(out, "Noise Limit:", &format!("{} dB", db));
    }
}

fn design_summary(out: &mut String, result: &DesignResult) {
    section(out, "Design Summary");
    row(
        out,
        "Core Area:",
        &format!("{:.2} cm²", result.core.net_area_cm2),
    );
    row(
        out,
        "Core Dimensions:",
        &format!("{:.1} × {:.1} mm", result.core.width_mm, result.core.depth_mm),
    );
    row(
        out,
        "Window Dimensions:",
        &format!(
            "{:.1} × {:.1} mm",
            result.core.window_width_mm, result.core.window_height_mm
        ),
    );
    row(out, "Primary Turns:", &format!("{:.0}", result.primary.turns));
    row(
        out,
        "Secondary Turns:",
        &format!("{:.0}", result.secondary.turns),
    );
    row(
        out,
        "Primary Current:",
        &format!("{:.2} A", result.primary.current_a),
    );
    row(
        out,
        "Secondary Current:",
        &format!("{:.2} A", result.secondary.current_a),
    );
    row(
        out,
        "Primary Conductor:",
        &format!(
            "SWG {} ({:.2} mm²)",
            result.primary.conductor.gauge.designation, result.primary.conductor.area_mm2
        ),
    );
    row(
        out,
        "Secondary Conductor:",
        &format!(
            "SWG {} ({:.2} mm²)",
            result.secondary.conductor.gauge.designation, result.secondary.conductor.area_mm2
        ),
    );
    row(
        out,
        "Calculated Efficiency:",
        &format!("{:.2}%", result.efficiency * 100.0),
    );
    row(
        out,
        "Total Losses:",
        &format!("{:.2} W", result.losses.total_w),
    );
    row(
        out,
        "Temperature Rise:",
        &format!("{:.1} °C", result.thermal.temperature_rise_c),
    );
    if let Some(noise) = &result.noise {
        row(out, "Noise Level:", &format!("{:.1} dB", noise.total_db));
    }
    row(
        out,
        "Hot Spot Temp:",
        &format!("{:.1} °C", result.thermal.hot_spot_c),
    );
    row(
        out,
        "Core Weight:",
        &format!("{:.1} kg", result.core_weight_kg()),
    );
    row(
        out,
        "Copper Weight:",
        &format!("{:.1} kg", result.copper_weight_kg),
    );
    row(out, "Total Cost:", &format!("${:.2}", result.cost.total_usd));
}

fn core_details(out: &mut String, file: &SpecFile, result: &DesignResult) {
    section(out, "Core Design Details");
    row(out, "Core Shape:", result.core.shape.display_name());
    row(out, "Material:", file.core_material.display_name());
    row(
        out,
        "Stacking Factor:",
        &format!("{:.3}", file.core_material.stacking_factor()),
    );
    row(
        out,
        "Building Factor:",
        &format!("{:.3}", result.core.building_factor),
    );
    row(
        out,
        "Net Core Area:",
        &format!("{:.2} cm²", result.core.net_area_cm2),
    );
    row(
        out,
        "Gross Core Area:",
        &format!("{:.2} cm²", result.core.gross_area_cm2),
    );
    row(out, "Core Width:", &format!("{:.1} mm", result.core.width_mm));
    row(out, "Core Depth:", &format!("{:.1} mm", result.core.depth_mm));
    row(
        out,
        "Window Width:",
        &format!("{:.1} mm", result.core.window_width_mm),
    );
    row(
        out,
        "Window Height:",
        &format!("{:.1} mm", result.core.window_height_mm),
    );
    if result.core.yoke_height_mm > 0.0 {
        row(
            out,
            "Yoke Height:",
            &format!("{:.1} mm", result.core.yoke_height_mm),
        );
    }
    row(
        out,
        "Core Volume:",
        &format!("{:.1} cm³", result.losses.core.volume_cm3),
    );
    row(
        out,
        "Core Weight:",
        &format!("{:.1} kg", result.losses.core.weight_kg),
    );
    row(
        out,
        "Flux Density:",
        &format!("{:.3} T", result.flux_density_t),
    );
    row(
        out,
        "Core Loss:",
        &format!("{:.2} W", result.losses.core.loss_w),
    );
}

/// Label/value pairs for a winding layout, shared between the winding
/// section and methodology step 5.
fn layout_lines(layout: &WindingLayout) -> Vec<(&'static str, String)> {
    match layout {
        WindingLayout::Vertical {
            turns_per_layer,
            layers,
            height_mm,
            radial_build_mm,
        } => vec![
            ("Turns per Layer:", format!("{}", turns_per_layer)),
            ("Layers:", format!("{}", layers)),
            ("Winding Height:", format!("{:.1} mm", height_mm)),
            ("Radial Build:", format!("{:.1} mm", radial_build_mm)),
        ],
        WindingLayout::Horizontal {
            turns_per_row,
            rows,
            height_mm,
            radial_build_mm,
        } => vec![
            ("Turns per Row:", format!("{}", turns_per_row)),
            ("Rows:", format!("{}", rows)),
            ("Winding Height:", format!("{:.1} mm", height_mm)),
            ("Radial Build:", format!("{:.1} mm", radial_build_mm)),
        ],
    }
}

fn winding_block(out: &mut String, heading: &str, rec: &WindingRecord) {
    out.push_str(&format!("  {}\n", heading));
    row(out, "  Turns:", &format!("{:.0}", rec.turns));
    row(out, "  Current:", &format!("{:.2} A", rec.current_a));
    row(
        out,
        "  Conductor Area:",
        &format!("{:.4} mm²", rec.conductor.area_mm2),
    );
    row(
        out,
        "  Conductor Type:",
        &format!(
            "SWG {} ({} mm)",
            rec.conductor.gauge.designation, rec.conductor.gauge.diameter_mm
        ),
    );
    row(
        out,
        "  Mean Turn Length:",
        &format!("{:.3} m", rec.winding.mean_turn_length_m),
    );
    row(
        out,
        "  Resistance:",
        &format!("{:.4} Ohm", rec.winding.resistance_ohm),
    );
    row(
        out,
        "  Copper Loss:",
        &format!("{:.2} W", rec.winding.copper_loss_w),
    );
    row(out, "  Eddy Loss:", &format!("{:.2} W", rec.eddy.loss_w));
    row(
        out,
        "  Skin Depth:",
        &format!("{:.3} mm", rec.conductor.skin_depth_mm),
    );
    if let Some(litz) = &rec.conductor.litz {
        row(
            out,
            "  Litz Wire:",
            &format!("{} strands of SWG {}", litz.strands, litz.strand_gauge.designation),
        );
    }
    out.push_str("    Winding Configuration:\n");
    for (label, value) in layout_lines(&rec.winding.layout) {
        row(out, &format!("  {}", label), &value);
    }
}

fn winding_details(out: &mut String, file: &SpecFile, result: &DesignResult) {
    section(out, "Winding Design Details");
    row(out, "Winding Type:", file.winding_type.display_name());
    out.push('\n');
    winding_block(out, "Primary Winding:", &result.primary);
    out.push('\n');
    winding_block(out, "Secondary Winding:", &result.secondary);
}

fn loss_analysis(out: &mut String, result: &DesignResult) {
    let losses = &result.losses;
    section(out, "Loss Analysis");
    row(
        out,
        "Primary Copper Loss:",
        &format!("{:.2} W", result.primary.winding.copper_loss_w),
    );
    row(
        out,
        "Secondary Copper Loss:",
        &format!("{:.2} W", result.secondary.winding.copper_loss_w),
    );
    row(
        out,
        "Harmonic Copper Loss:",
        &format!("{:.2} W", losses.harmonic_copper_w),
    );
    row(out, "Total Copper Loss:", &format!("{:.2} W", losses.copper_w));
    row(
        out,
        "Primary Eddy Loss:",
        &format!("{:.2} W", losses.eddy_primary.loss_w),
    );
    row(
        out,
        "Secondary Eddy Loss:",
        &format!("{:.2} W", losses.eddy_secondary.loss_w),
    );
    row(
        out,
        "Harmonic Eddy Loss:",
        &format!("{:.2} W", losses.harmonic_eddy_w),
    );
    row(
        out,
        "Total Eddy Loss:",
        &format!(
            "{:.2} W",
            losses.eddy_primary.loss_w + losses.eddy_secondary.loss_w + losses.harmonic_eddy_w
        ),
    );
    row(out, "Core Loss:", &format!("{:.2} W", losses.core.loss_w));
    row(out, "Stray Loss:", &format!("{:.2} W", losses.stray_w));
    row(out, "Total Losses:", &format!("{:.2} W", losses.total_w));
}

fn thermal_analysis(out: &mut String, file: &SpecFile, result: &DesignResult) {
    let thermal = &result.thermal;
    section(out, "Thermal Analysis");
    row(out, "Cooling Type:", file.cooling.display_name());
    row(
        out,
        "Surface Area:",
        &format!("{:.3} m²", thermal.surface_area_m2),
    );
    row(
        out,
        "Cooling Coefficient:",
        &format!("{:.1} W/m²°C", thermal.heat_transfer_w_per_m2_c),
    );
    row(
        out,
        "Adjusted Coefficient:",
        &format!("{:.1} W/m²°C", thermal.derated_heat_transfer_w_per_m2_c),
    );
    row(
        out,
        "Temperature Rise:",
        &format!("{:.1} °C", thermal.temperature_rise_c),
    );
    row(
        out,
        "Hot Spot Temperature:",
        &format!("{:.1} °C", thermal.hot_spot_c),
    );
    row(out, "Ambient Temperature:", &format!("{} °C", file.ambient_c));
    row(
        out,
        "Maximum Allowed Rise:",
        &format!("{} °C", file.limits.max_temp_rise_c),
    );
}

/// Label/value pairs for the tank or enclosure, shared between the
/// mechanical section and methodology step 9.
fn mechanical_lines(mechanical: &MechanicalResult) -> Vec<(&'static str, String)> {
    match mechanical {
        MechanicalResult::OilImmersed {
            tank_width_m,
            tank_depth_m,
            tank_height_m,
            oil_volume_l,
            radiator_area_m2,
            tank_weight_kg,
            conservator_l,
        } => {
            let mut lines = vec![
                ("Tank Width:", format!("{:.2} m", tank_width_m)),
                ("Tank Depth:", format!("{:.2} m", tank_depth_m)),
                ("Tank Height:", format!("{:.2} m", tank_height_m)),
                ("Oil Volume:", format!("{:.2} L", oil_volume_l)),
                ("Radiator Area:", format!("{:.2} m²", radiator_area_m2)),
                ("Tank Weight:", format!("{:.2} kg", tank_weight_kg)),
            ];
            if let Some(v) = conservator_l {
                lines.push(("Conservator Size:", format!("{:.2} L", v)));
            }
            lines
        }
        MechanicalResult::DryType {
            enclosure_width_m,
            enclosure_depth_m,
            enclosure_height_m,
            cooling,
        } => {
            let mut lines = vec![
                ("Enclosure Width:", format!("{:.2} m", enclosure_width_m)),
                ("Enclosure Depth:", format!("{:.2} m", enclosure_depth_m)),
                ("Enclosure Height:", format!("{:.2} m", enclosure_height_m)),
            ];
            match cooling {
                DryCooling::ForcedAir {
                    air_flow_m3_s,
                    fan_count,
                } => {
                    lines.push(("Required Air Flow:", format!("{:.2} m³/s", air_flow_m3_s)));
                    lines.push(("Number of Fans:", format!("{}", fan_count)));
                }
                DryCooling::Vented { vent_area_m2 } => {
                    lines.push(("Ventilation Area:", format!("{:.2} m²", vent_area_m2)));
                }
            }
            lines
        }
    }
}

fn mechanical_design(out: &mut String, result: &DesignResult) {
    section(out, "Mechanical Design");
    for (label, value) in mechanical_lines(&result.mechanical) {
        row(out, label, &value);
    }
}

fn dynamic_performance(out: &mut String, result: &DesignResult) {
    let sc = &result.short_circuit;
    section(out, "Dynamic Performance");
    row(out, "Reactance:", &format!("{:.4} Ohm", sc.reactance_ohm));
    row(
        out,
        "Short-Circuit Current:",
        &format!("{:.1} A", sc.current_a),
    );
    row(out, "Radial Force:", &format!("{:.1} N", sc.radial_force_n));
    row(
        out,
        "Thermal Capacity:",
        &format!("{:.1} A²s", sc.thermal_capacity_a2s),
    );
    row(
        out,
        "Peak Inrush Current:",
        &format!("{:.1} A", result.inrush.peak_current_a),
    );
    row(
        out,
        "Inrush Duration:",
        &format!("{:.1} cycles", result.inrush.duration_cycles),
    );
}

fn cost_analysis(out: &mut String, result: &DesignResult) {
    section(out, "Cost Analysis");
    row(
        out,
        "Core Weight:",
        &format!("{:.1} kg", result.core_weight_kg()),
    );
    row(
        out,
        "Copper Weight:",
        &format!("{:.1} kg", result.copper_weight_kg),
    );
    row(out, "Core Cost:", &format!("${:.2}", result.cost.core_usd));
    row(out, "Winding Cost:", &format!("${:.2}", result.cost.winding_usd));
    row(out, "Cooling Cost:", &format!("${:.2}", result.cost.cooling_usd));
    row(
        out,
        "Labor Factor:",
        &format!("{:.1}", result.cost.labor_factor),
    );
    row(out, "Total Cost:", &format!("${:.2}", result.cost.total_usd));
}

fn methodology(out: &mut String, file: &SpecFile, result: &DesignResult) {
    section(out, "Design Methodology");

    let core = &result.core;
    let bm = result.flux_density_t;
    let j = result.current_density_a_mm2;
    let k_area = if file.power_va < 1000.0 { 0.9 } else { 1.1 };
    let stacking = file.core_material.stacking_factor();

    out.push_str(&format!(
        "\n1. Core Dimensions ({}):\n",
        core.shape.display_name()
    ));
    out.push_str(&format!(
        "   Core area: A_c = K×sqrt(P) = {:.1} × sqrt({}) = {:.2} cm²\n",
        k_area, file.power_va, core.net_area_cm2
    ));
    out.push_str(&format!(
        "   Gross core area: A_g = A_c/k = {:.2}/{} = {:.2} cm²\n",
        core.net_area_cm2, stacking, core.gross_area_cm2
    ));
    out.push_str(&format!("   Core width: {:.1} mm\n", core.width_mm));
    out.push_str(&format!("   Core depth: {:.1} mm\n", core.depth_mm));
    out.push_str(&format!("   Window width: {:.1} mm\n", core.window_width_mm));
    out.push_str(&format!(
        "   Window height: {:.1} mm\n",
        core.window_height_mm
    ));
    if core.yoke_height_mm > 0.0 {
        out.push_str(&format!("   Yoke height: {:.1} mm\n", core.yoke_height_mm));
    }

    let three = file.phase == Phase::Three;
    let conn_factor = file.connection.line_to_phase_factor();
    let turns_div = if three && conn_factor != 1.0 {
        format!("×{:.3}", conn_factor)
    } else {
        String::new()
    };

    out.push_str("\n2. Turns Calculation:\n");
    out.push_str(&format!(
        "   Primary turns: N1 = V1/(4.44×f×Bm×Ac{d}) = {v}/(4.44×{f}×{bm:.2}×{a:.2}e-4{d}) = {n:.0}\n",
        d = turns_div,
        v = file.primary_voltage_v,
        f = file.frequency_hz,
        bm = bm,
        a = core.net_area_cm2,
        n = result.primary.turns
    ));
    out.push_str(&format!(
        "   Secondary turns: N2 = V2×(1+alpha)/(4.44×f×Bm×Ac{d}) = {v}×{r}/(4.44×{f}×{bm:.2}×{a:.2}e-4{d}) = {n:.0}\n",
        d = turns_div,
        v = file.secondary_voltage_v,
        r = 1.0 + file.regulation,
        f = file.frequency_hz,
        bm = bm,
        a = core.net_area_cm2,
        n = result.secondary.turns
    ));

    out.push_str("\n3. Current Calculation:\n");
    if three {
        let k = if conn_factor != 1.0 {
            format!("{:.3}×", conn_factor)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "   Primary current: I1 = {k}P/(3×V1) = {k}{p}/(3×{v}) = {i:.2} A\n",
            k = k,
            p = file.power_va,
            v = file.primary_voltage_v,
            i = result.primary.current_a
        ));
        out.push_str(&format!(
            "   Secondary current: I2 = {k}P/(3×V2) = {k}{p}/(3×{v}) = {i:.2} A\n",
            k = k,
            p = file.power_va,
            v = file.secondary_voltage_v,
            i = result.secondary.current_a
        ));
    } else {
        out.push_str(&format!(
            "   Primary current: I1 = P/V1 = {}/{} = {:.2} A\n",
            file.power_va, file.primary_voltage_v, result.primary.current_a
        ));
        out.push_str(&format!(
            "   Secondary current: I2 = P/V2 = {}/{} = {:.2} A\n",
            file.power_va, file.secondary_voltage_v, result.secondary.current_a
        ));
    }

    out.push_str("\n4. Conductor Sizing:\n");
    out.push_str(&format!(
        "   Primary conductor area: Aw1 = I1/J = {:.2}/{:.2} = {:.4} mm²\n",
        result.primary.current_a, j, result.primary.conductor.area_mm2
    ));
    out.push_str(&format!(
        "   Secondary conductor area: Aw2 = I2/J = {:.2}/{:.2} = {:.4} mm²\n",
        result.secondary.current_a, j, result.secondary.conductor.area_mm2
    ));
    out.push_str(&format!(
        "   Primary wire: SWG {} ({} mm)\n",
        result.primary.conductor.gauge.designation, result.primary.conductor.gauge.diameter_mm
    ));
    out.push_str(&format!(
        "   Secondary wire: SWG {} ({} mm)\n",
        result.secondary.conductor.gauge.designation,
        result.secondary.conductor.gauge.diameter_mm
    ));
    if let Some(litz) = &result.primary.conductor.litz {
        out.push_str(&format!(
            "   Primary requires Litz wire: {} strands of SWG {}\n",
            litz.strands, litz.strand_gauge.designation
        ));
    }
    if let Some(litz) = &result.secondary.conductor.litz {
        out.push_str(&format!(
            "   Secondary requires Litz wire: {} strands of SWG {}\n",
            litz.strands, litz.strand_gauge.designation
        ));
    }

    out.push_str(&format!(
        "\n5. Winding Design ({}):\n",
        file.winding_type.display_name()
    ));
    out.push_str("   Primary Winding:\n");
    for (label, value) in layout_lines(&result.primary.winding.layout) {
        out.push_str(&format!("      {} {}\n", label, value));
    }
    out.push_str("   Secondary Winding:\n");
    for (label, value) in layout_lines(&result.secondary.winding.layout) {
        out.push_str(&format!("      {} {}\n", label, value));
    }

    let losses = &result.losses;
    out.push_str("\n6. Loss Calculations:\n");
    out.push_str(&format!(
        "   Primary copper loss: {:.2} W\n",
        result.primary.winding.copper_loss_w
    ));
    out.push_str(&format!(
        "   Secondary copper loss: {:.2} W\n",
        result.secondary.winding.copper_loss_w
    ));
    out.push_str(&format!(
        "   Harmonic copper loss: {:.2} W\n",
        losses.harmonic_copper_w
    ));
    out.push_str(&format!(
        "   Primary eddy loss: {:.2} W\n",
        losses.eddy_primary.loss_w
    ));
    out.push_str(&format!(
        "   Secondary eddy loss: {:.2} W\n",
        losses.eddy_secondary.loss_w
    ));
    out.push_str(&format!(
        "   Harmonic eddy loss: {:.2} W\n",
        losses.harmonic_eddy_w
    ));
    out.push_str(&format!("   Core loss: {:.2} W\n", losses.core.loss_w));
    out.push_str(&format!("   Stray loss: {:.2} W\n", losses.stray_w));
    out.push_str(&format!("   Total losses: {:.2} W\n", losses.total_w));

    out.push_str("\n7. Thermal Analysis:\n");
    out.push_str(&format!(
        "   Surface area: {:.2} m²\n",
        result.thermal.surface_area_m2
    ));
    out.push_str(&format!(
        "   Cooling coefficient: {:.1} W/m²°C\n",
        result.thermal.heat_transfer_w_per_m2_c
    ));
    out.push_str(&format!(
        "   Temperature rise: {:.1} °C\n",
        result.thermal.temperature_rise_c
    ));
    out.push_str(&format!(
        "   Hot spot temperature: {:.1} °C\n",
        result.thermal.hot_spot_c
    ));

    if let Some(noise) = &result.noise {
        out.push_str("\n8. Noise Calculation:\n");
        out.push_str(&format!("   Core noise: {:.1} dB\n", noise.core_db));
        out.push_str(&format!(
            "   Flux adjusted noise: {:.1} dB\n",
            noise.flux_adjusted_db
        ));
        out.push_str(&format!(
            "   Frequency adjusted noise: {:.1} dB\n",
            noise.frequency_adjusted_db
        ));
        if let Some(db) = noise.cooling_db {
            out.push_str(&format!("   Cooling system noise: {:.1} dB\n", db));
        }
        out.push_str(&format!("   Total noise level: {:.1} dB\n", noise.total_db));
    }

    out.push_str("\n9. Mechanical Design:\n");
    for (label, value) in mechanical_lines(&result.mechanical) {
        out.push_str(&format!("   {} {}\n", label, value));
    }

    let sc = &result.short_circuit;
    out.push_str("\n10. Dynamic Performance:\n");
    out.push_str(&format!("   Reactance: {:.4} Ohm\n", sc.reactance_ohm));
    out.push_str(&format!(
        "   Short-circuit current: {:.1} A\n",
        sc.current_a
    ));
    out.push_str(&format!("   Radial force: {:.1} N\n", sc.radial_force_n));
    out.push_str(&format!(
        "   Thermal capacity: {:.1} A²s\n",
        sc.thermal_capacity_a2s
    ));
    out.push_str(&format!(
        "   Peak inrush current: {:.1} A\n",
        result.inrush.peak_current_a
    ));
    out.push_str(&format!(
        "   Inrush duration: {:.1} cycles\n",
        result.inrush.duration_cycles
    ));

    out.push_str("\n11. Cost Estimation:\n");
    out.push_str(&format!(
        "   Core weight: {:.1} kg\n",
        result.core_weight_kg()
    ));
    out.push_str(&format!(
        "   Copper weight: {:.1} kg\n",
        result.copper_weight_kg
    ));
    out.push_str(&format!("   Core cost: ${:.2}\n", result.cost.core_usd));
    out.push_str(&format!(
        "   Winding cost: ${:.2}\n",
        result.cost.winding_usd
    ));
    out.push_str(&format!(
        "   Cooling cost: ${:.2}\n",
        result.cost.cooling_usd
    ));
    out.push_str(&format!("   Total cost: ${:.2}\n", result.cost.total_usd));
}
