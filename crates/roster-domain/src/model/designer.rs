//! Designer - Paid by the tools they bring

use std::collections::BTreeSet;

use super::compensation::Compensation;

/// How many projects a designer may be on at once
pub const DESIGNER_MAX_PROJECTS: usize = 2;

const FIGMA_BONUS: f64 = 300.0;
const SINGLE_TOOL_BONUS: f64 = 200.0;
const TOOLKIT_BONUS: f64 = 400.0;
const TOOLKIT_SIZE: usize = 3;

static KNOWN_SPECIALTIES: [Specialty; 3] = [Specialty::Ui, Specialty::Ux, Specialty::Graphic];

/// Design specialty
///
/// Informational only; it does not affect pay.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Specialty {
    Ui,
    Ux,
    Graphic,
    Other(String),
}

impl Specialty {
    /// Case-insensitive; accepts the Spanish "Gráfico" spelling too
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "ui" => Specialty::Ui,
            "ux" => Specialty::Ux,
            "graphic" | "gráfico" | "grafico" => Specialty::Graphic,
            _ => Specialty::Other(raw.trim().to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Specialty::Ui => "UI",
            Specialty::Ux => "UX",
            Specialty::Graphic => "Graphic",
            Specialty::Other(raw) => raw,
        }
    }

    pub fn known() -> &'static [Specialty] {
        &KNOWN_SPECIALTIES
    }
}

impl From<&str> for Specialty {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl core::fmt::Display for Specialty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Designer-specific data
#[derive(Debug, Clone, PartialEq)]
pub struct Designer {
    /// Tools the designer works with (deduplicated, sorted)
    tools: BTreeSet<String>,
    specialty: Specialty,
}

impl Designer {
    pub fn new(tools: impl IntoIterator<Item = impl Into<String>>, specialty: Specialty) -> Self {
        Self {
            tools: tools.into_iter().map(|t| t.into()).collect(),
            specialty,
        }
    }

    pub fn tools(&self) -> &BTreeSet<String> {
        &self.tools
    }

    pub fn specialty(&self) -> &Specialty {
        &self.specialty
    }

    pub fn uses(&self, tool: &str) -> bool {
        self.tools.contains(tool)
    }
}

impl Compensation for Designer {
    /// Figma wins over the single Photoshop/Illustrator bonus.
    /// The toolkit bonus stacks on top of either.
    fn bonus(&self) -> f64 {
        let mut bonus = 0.0;

        if self.uses("Figma") {
            bonus += FIGMA_BONUS;
        } else if self.tools.len() == 1 && (self.uses("Photoshop") || self.uses("Illustrator")) {
            bonus += SINGLE_TOOL_BONUS;
        }

        if self.tools.len() >= TOOLKIT_SIZE {
            bonus += TOOLKIT_BONUS;
        }

        bonus
    }

    fn max_projects(&self) -> usize {
        DESIGNER_MAX_PROJECTS
    }
}
