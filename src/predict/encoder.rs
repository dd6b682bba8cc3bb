use crate::data::model::{CompanySize, EmploymentType, ExperienceLevel};

// ---------------------------------------------------------------------------
// Form-only option sets
// ---------------------------------------------------------------------------
//
// The regression model was trained on label-encoded columns. Each dropdown
// option carries its training-time integer code; the exhaustive matches
// below make a missing code a compile error when an option is added.

/// Work years offered by the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictorYear {
    Y2020,
    Y2021,
    Y2022,
    #[default]
    Y2023,
}

impl PredictorYear {
    pub const ALL: [PredictorYear; 4] = [Self::Y2020, Self::Y2021, Self::Y2022, Self::Y2023];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Y2020 => "2020",
            Self::Y2021 => "2021",
            Self::Y2022 => "2022",
            Self::Y2023 => "2023",
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Y2020 => 0,
            Self::Y2021 => 1,
            Self::Y2022 => 2,
            Self::Y2023 => 3,
        }
    }
}

/// Job titles offered by the prediction form. A closed, hand-enumerated
/// set – not derived from whatever dataset happens to be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobRole {
    AnalyticsEngineer,
    AppliedScientist,
    BusinessIntelligenceEngineer,
    DataAnalyst,
    DataArchitect,
    DataEngineer,
    #[default]
    DataScientist,
    MachineLearningEngineer,
    ResearchEngineer,
    ResearchScientist,
}

impl JobRole {
    pub const ALL: [JobRole; 10] = [
        Self::AnalyticsEngineer,
        Self::AppliedScientist,
        Self::BusinessIntelligenceEngineer,
        Self::DataAnalyst,
        Self::DataArchitect,
        Self::DataEngineer,
        Self::DataScientist,
        Self::MachineLearningEngineer,
        Self::ResearchEngineer,
        Self::ResearchScientist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AnalyticsEngineer => "Analytics Engineer",
            Self::AppliedScientist => "Applied Scientist",
            Self::BusinessIntelligenceEngineer => "Business Intelligence Engineer",
            Self::DataAnalyst => "Data Analyst",
            Self::DataArchitect => "Data Architect",
            Self::DataEngineer => "Data Engineer",
            Self::DataScientist => "Data Scientist",
            Self::MachineLearningEngineer => "Machine Learning Engineer",
            Self::ResearchEngineer => "Research Engineer",
            Self::ResearchScientist => "Research Scientist",
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::AnalyticsEngineer => 0,
            Self::AppliedScientist => 1,
            Self::BusinessIntelligenceEngineer => 2,
            Self::DataAnalyst => 3,
            Self::DataArchitect => 4,
            Self::DataEngineer => 5,
            Self::DataScientist => 6,
            Self::MachineLearningEngineer => 7,
            Self::ResearchEngineer => 8,
            Self::ResearchScientist => 9,
        }
    }
}

/// Company locations offered by the prediction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Country {
    Australia,
    Brazil,
    Canada,
    Germany,
    Spain,
    France,
    UnitedKingdom,
    India,
    Netherlands,
    #[default]
    UnitedStates,
}

impl Country {
    pub const ALL: [Country; 10] = [
        Self::Australia,
        Self::Brazil,
        Self::Canada,
        Self::Germany,
        Self::Spain,
        Self::France,
        Self::UnitedKingdom,
        Self::India,
        Self::Netherlands,
        Self::UnitedStates,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Australia => "Australia",
            Self::Brazil => "Brazil",
            Self::Canada => "Canada",
            Self::Germany => "Germany",
            Self::Spain => "Spain",
            Self::France => "France",
            Self::UnitedKingdom => "United Kingdom",
            Self::India => "India",
            Self::Netherlands => "Netherlands",
            Self::UnitedStates => "United States",
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::Australia => 0,
            Self::Brazil => 1,
            Self::Canada => 2,
            Self::Germany => 3,
            Self::Spain => 4,
            Self::France => 5,
            Self::UnitedKingdom => 6,
            Self::India => 7,
            Self::Netherlands => 8,
            Self::UnitedStates => 9,
        }
    }
}

// ---------------------------------------------------------------------------
// Codes for the shared data-model enums
// ---------------------------------------------------------------------------

/// Training-time code of an experience level.
pub fn experience_code(level: ExperienceLevel) -> i64 {
    match level {
        ExperienceLevel::Entry => 0,
        ExperienceLevel::Executive => 1,
        ExperienceLevel::Mid => 2,
        ExperienceLevel::Senior => 3,
    }
}

/// Training-time code of an employment type.
pub fn employment_code(employment: EmploymentType) -> i64 {
    match employment {
        EmploymentType::Contract => 0,
        EmploymentType::Freelance => 1,
        EmploymentType::FullTime => 2,
        EmploymentType::PartTime => 3,
    }
}

/// Training-time code of a company size.
pub fn company_size_code(size: CompanySize) -> i64 {
    match size {
        CompanySize::Large => 0,
        CompanySize::Medium => 1,
        CompanySize::Small => 2,
    }
}

// ---------------------------------------------------------------------------
// PredictionInput – one encoded form submission
// ---------------------------------------------------------------------------

/// The six categorical selections of one form submission. Transient: built
/// from the UI, encoded, and handed to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionInput {
    pub work_year: PredictorYear,
    pub experience: ExperienceLevel,
    pub employment: EmploymentType,
    pub job_title: JobRole,
    pub company_size: CompanySize,
    pub company_location: Country,
}

impl PredictionInput {
    pub const FEATURES: usize = 6;

    /// Feature vector in training column order:
    /// `[work_year, experience_level, employment_type, job_title,
    ///   company_size, company_location]`.
    pub fn encode(&self) -> [f64; Self::FEATURES] {
        [
            self.work_year.code() as f64,
            experience_code(self.experience) as f64,
            employment_code(self.employment) as f64,
            self.job_title.code() as f64,
            company_size_code(self.company_size) as f64,
            self.company_location.code() as f64,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_distinct(codes: &[i64]) {
        let mut seen = codes.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), codes.len(), "duplicate codes in {codes:?}");
    }

    #[test]
    fn every_dropdown_option_has_a_distinct_code() {
        all_distinct(&PredictorYear::ALL.map(|y| y.code()));
        all_distinct(&JobRole::ALL.map(|r| r.code()));
        all_distinct(&Country::ALL.map(|c| c.code()));
        all_distinct(&ExperienceLevel::ALL.map(experience_code));
        all_distinct(&EmploymentType::ALL.map(employment_code));
        all_distinct(&CompanySize::ALL.map(company_size_code));
    }

    #[test]
    fn every_dropdown_option_has_a_label() {
        for year in PredictorYear::ALL {
            assert!(!year.label().is_empty());
        }
        for role in JobRole::ALL {
            assert!(!role.label().is_empty());
        }
        for country in Country::ALL {
            assert!(!country.label().is_empty());
        }
    }

    #[test]
    fn encode_follows_training_column_order() {
        let input = PredictionInput {
            work_year: PredictorYear::Y2022,
            experience: ExperienceLevel::Senior,
            employment: EmploymentType::FullTime,
            job_title: JobRole::DataScientist,
            company_size: CompanySize::Medium,
            company_location: Country::UnitedStates,
        };
        assert_eq!(input.encode(), [2.0, 3.0, 2.0, 6.0, 1.0, 9.0]);
    }
}
