use serde::Serialize;

/// Maximum points each sub-dimension contributes at a composite of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionWeights {
    pub skills_match: u8,
    pub experience: u8,
    pub domain_fit: u8,
    pub education: u8,
}

pub const WEIGHTS: DimensionWeights = DimensionWeights {
    skills_match: 40,
    experience: 30,
    domain_fit: 15,
    education: 15,
};

pub const MIN_COMPOSITE: i32 = 10;
pub const MAX_COMPOSITE: i32 = 100;
pub const PENALTY_PER_VIOLATION: i32 = 9;

/// Base scores are drawn as `floor(r * BASE_SCORE_SPAN) + BASE_SCORE_FLOOR`, i.e. 35..=89.
pub const BASE_SCORE_FLOOR: u8 = 35;
pub const BASE_SCORE_SPAN: usize = 55;

pub const STRONG_THRESHOLD: u8 = 80;
pub const POTENTIAL_THRESHOLD: u8 = 50;

/// Percentage cut-offs choosing a narrative template: `>= strong`, `>= fair`, else weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeBands {
    pub strong: u8,
    pub fair: u8,
}

pub const SKILLS_BANDS: NarrativeBands = NarrativeBands { strong: 85, fair: 60 };
pub const EXPERIENCE_BANDS: NarrativeBands = NarrativeBands { strong: 80, fair: 55 };
pub const DOMAIN_BANDS: NarrativeBands = NarrativeBands { strong: 85, fair: 60 };
pub const EDUCATION_BANDS: NarrativeBands = NarrativeBands { strong: 75, fair: 50 };

impl DimensionWeights {
    pub fn total(&self) -> u16 {
        u16::from(self.skills_match)
            + u16::from(self.experience)
            + u16::from(self.domain_fit)
            + u16::from(self.education)
    }
}
