use crate::catalog::domain::{AttributeSet, Category, ComponentRecord, TextValue};
use crate::catalog::services::BuildAccumulator;
use serde::Serialize;
use std::fmt;

/// Watts added to the CPU and GPU TDP when estimating system draw
pub const PLATFORM_POWER_ALLOWANCE_WATTS: f64 = 100.0;

/// A potential incompatibility between two selected parts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityNote {
    pub first: Category,
    pub second: Category,
    pub message: String,
}

impl CompatibilityNote {
    fn new(first: Category, second: Category, message: String) -> Self {
        Self {
            first,
            second,
            message,
        }
    }
}

impl fmt::Display for CompatibilityNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {}: {}",
            self.first.display_name(),
            self.second.display_name(),
            self.message
        )
    }
}

/// CompatibilityAdvisor policy for spotting mismatched parts in a build
///
/// Advisory only: the accumulator accepts any combination, and these notes
/// are shown alongside the build summary. Each rule needs data on both sides;
/// if either part lacks the attribute the rule is skipped.
///
/// Rules, in report order:
/// 1. CPU socket matches the motherboard socket
/// 2. Memory type matches the motherboard memory type
/// 3. Case supports the motherboard form factor
/// 4. GPU fits within the case's maximum GPU length
/// 5. Cooler supports the CPU socket
/// 6. PSU wattage covers CPU TDP + GPU TDP + platform allowance
pub struct CompatibilityAdvisor;

impl CompatibilityAdvisor {
    pub fn review(build: &BuildAccumulator) -> Vec<CompatibilityNote> {
        let cpu = build.get(Category::Cpu);
        let motherboard = build.get(Category::Motherboard);
        let memory = build.get(Category::Memory);
        let case = build.get(Category::Case);
        let gpu = build.get(Category::Gpu);
        let cooler = build.get(Category::Cooler);
        let psu = build.get(Category::Psu);

        [
            Self::check_cpu_socket(cpu, motherboard),
            Self::check_memory_type(memory, motherboard),
            Self::check_case_form_factor(motherboard, case),
            Self::check_gpu_clearance(gpu, case),
            Self::check_cooler_socket(cooler, cpu),
            Self::check_power_budget(psu, cpu, gpu),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn check_cpu_socket(
        cpu: Option<&ComponentRecord>,
        motherboard: Option<&ComponentRecord>,
    ) -> Option<CompatibilityNote> {
        let cpu_socket = cpu?.text("socket")?;
        let board_socket = motherboard?.text("socket")?;
        if overlaps(cpu_socket, board_socket) {
            return None;
        }
        Some(CompatibilityNote::new(
            Category::Cpu,
            Category::Motherboard,
            format!(
                "CPU socket {} does not match motherboard socket {}",
                cpu_socket.to_display(),
                board_socket.to_display()
            ),
        ))
    }

    fn check_memory_type(
        memory: Option<&ComponentRecord>,
        motherboard: Option<&ComponentRecord>,
    ) -> Option<CompatibilityNote> {
        let kit_type = memory?.text("memory_type")?;
        let board_type = motherboard?.text("memory_type")?;
        if overlaps(kit_type, board_type) {
            return None;
        }
        Some(CompatibilityNote::new(
            Category::Memory,
            Category::Motherboard,
            format!(
                "{} memory is not supported by a {} motherboard",
                kit_type.to_display(),
                board_type.to_display()
            ),
        ))
    }

    fn check_case_form_factor(
        motherboard: Option<&ComponentRecord>,
        case: Option<&ComponentRecord>,
    ) -> Option<CompatibilityNote> {
        let form_factor = motherboard?.text("form_factor")?;
        let supported = case?.text("motherboard_form_factors")?;
        if overlaps(form_factor, supported) {
            return None;
        }
        Some(CompatibilityNote::new(
            Category::Motherboard,
            Category::Case,
            format!(
                "{} motherboard does not fit a case supporting {}",
                form_factor.to_display(),
                supported.to_display()
            ),
        ))
    }

    fn check_gpu_clearance(
        gpu: Option<&ComponentRecord>,
        case: Option<&ComponentRecord>,
    ) -> Option<CompatibilityNote> {
        let length = gpu?.number("length_mm")?;
        let clearance = case?.number("max_gpu_length_mm")?;
        if length <= clearance {
            return None;
        }
        Some(CompatibilityNote::new(
            Category::Gpu,
            Category::Case,
            format!(
                "Video card is {} mm long but the case fits at most {} mm",
                length, clearance
            ),
        ))
    }

    fn check_cooler_socket(
        cooler: Option<&ComponentRecord>,
        cpu: Option<&ComponentRecord>,
    ) -> Option<CompatibilityNote> {
        let supported = cooler?.text("sockets")?;
        let cpu_socket = cpu?.text("socket")?;
        if overlaps(cpu_socket, supported) {
            return None;
        }
        Some(CompatibilityNote::new(
            Category::Cooler,
            Category::Cpu,
            format!(
                "Cooler supports {} but the CPU uses {}",
                supported.to_display(),
                cpu_socket.to_display()
            ),
        ))
    }

    /// Skipped unless the PSU wattage and at least one TDP are known; an
    /// unknown TDP on the other part counts as zero.
    fn check_power_budget(
        psu: Option<&ComponentRecord>,
        cpu: Option<&ComponentRecord>,
        gpu: Option<&ComponentRecord>,
    ) -> Option<CompatibilityNote> {
        let wattage = psu?.number("wattage")?;
        let cpu_tdp = cpu.and_then(|c| c.number("tdp_watts"));
        let gpu_tdp = gpu.and_then(|g| g.number("tdp_watts"));
        if cpu_tdp.is_none() && gpu_tdp.is_none() {
            return None;
        }

        let estimate =
            cpu_tdp.unwrap_or(0.0) + gpu_tdp.unwrap_or(0.0) + PLATFORM_POWER_ALLOWANCE_WATTS;
        if wattage >= estimate {
            return None;
        }
        let other = if gpu_tdp.is_some() {
            Category::Gpu
        } else {
            Category::Cpu
        };
        Some(CompatibilityNote::new(
            Category::Psu,
            other,
            format!(
                "{} W power supply is below the estimated {} W draw",
                wattage, estimate
            ),
        ))
    }
}

fn values<'a>(value: TextValue<'a>) -> Vec<&'a str> {
    match value {
        TextValue::One(v) => vec![v],
        TextValue::Many(vs) => vs.iter().map(String::as_str).collect(),
    }
}

fn overlaps(a: TextValue<'_>, b: TextValue<'_>) -> bool {
    let b = values(b);
    values(a).iter().any(|v| b.contains(v))
}
