use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Categorical columns – closed sets coded as in the source dataset
// ---------------------------------------------------------------------------

/// Seniority of a posting, stored in the dataset as a two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    #[serde(rename = "EN")]
    Entry,
    #[serde(rename = "MI")]
    Mid,
    #[serde(rename = "SE")]
    Senior,
    #[serde(rename = "EX")]
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] =
        [Self::Entry, Self::Mid, Self::Senior, Self::Executive];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Entry => "Entry level",
            Self::Mid => "Mid level",
            Self::Senior => "Senior",
            Self::Executive => "Executive",
        }
    }

    /// Two-letter code as it appears in the dataset.
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::Entry => "EN",
            Self::Mid => "MI",
            Self::Senior => "SE",
            Self::Executive => "EX",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.short_code() == code)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contract type of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "FT")]
    FullTime,
    #[serde(rename = "PT")]
    PartTime,
    #[serde(rename = "CT")]
    Contract,
    #[serde(rename = "FL")]
    Freelance,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] =
        [Self::FullTime, Self::PartTime, Self::Contract, Self::Freelance];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullTime => "Full time",
            Self::PartTime => "Part time",
            Self::Contract => "Contract",
            Self::Freelance => "Freelance",
        }
    }

    pub fn short_code(&self) -> &'static str {
        match self {
            Self::FullTime => "FT",
            Self::PartTime => "PT",
            Self::Contract => "CT",
            Self::Freelance => "FL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.short_code() == code)
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headcount bracket of the hiring company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "S")]
    Small,
    #[default]
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl CompanySize {
    pub const ALL: [CompanySize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small (<50)",
            Self::Medium => "Medium (50-250)",
            Self::Large => "Large (>250)",
        }
    }

    pub fn short_code(&self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.short_code() == code)
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// SalaryRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single job posting. Immutable once loaded; extra fields in the source
/// file (salary_currency, remote_ratio, …) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryRecord {
    pub work_year: i32,
    pub experience_level: ExperienceLevel,
    pub employment_type: EmploymentType,
    pub job_title: String,
    pub salary_in_usd: f64,
    pub company_size: CompanySize,
    pub company_location: String,
}

// ---------------------------------------------------------------------------
// SalaryDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full record set with pre-computed unique-value indices.
#[derive(Debug, Clone, Default)]
pub struct SalaryDataset {
    /// All postings (rows).
    pub records: Vec<SalaryRecord>,
    /// Sorted unique work years.
    pub years: Vec<i32>,
    /// Sorted unique job titles.
    pub job_titles: Vec<String>,
    /// Sorted unique company locations (ISO country codes).
    pub locations: Vec<String>,
}

impl SalaryDataset {
    /// Build the unique-value indices from the loaded records.
    pub fn from_records(records: Vec<SalaryRecord>) -> Self {
        let mut years: BTreeSet<i32> = BTreeSet::new();
        let mut job_titles: BTreeSet<String> = BTreeSet::new();
        let mut locations: BTreeSet<String> = BTreeSet::new();

        for rec in &records {
            years.insert(rec.work_year);
            job_titles.insert(rec.job_title.clone());
            locations.insert(rec.company_location.clone());
        }

        SalaryDataset {
            records,
            years: years.into_iter().collect(),
            job_titles: job_titles.into_iter().collect(),
            locations: locations.into_iter().collect(),
        }
    }

    /// Number of postings.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, title: &str, location: &str) -> SalaryRecord {
        SalaryRecord {
            work_year: year,
            experience_level: ExperienceLevel::Senior,
            employment_type: EmploymentType::FullTime,
            job_title: title.to_string(),
            salary_in_usd: 100_000.0,
            company_size: CompanySize::Medium,
            company_location: location.to_string(),
        }
    }

    #[test]
    fn indices_are_sorted_and_deduplicated() {
        let ds = SalaryDataset::from_records(vec![
            record(2023, "Data Scientist", "US"),
            record(2021, "Data Engineer", "GB"),
            record(2023, "Data Scientist", "US"),
        ]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.years, vec![2021, 2023]);
        assert_eq!(ds.job_titles, vec!["Data Engineer", "Data Scientist"]);
        assert_eq!(ds.locations, vec!["GB", "US"]);
    }

    #[test]
    fn codes_round_trip() {
        for lvl in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::from_code(lvl.short_code()), Some(lvl));
        }
        for ty in EmploymentType::ALL {
            assert_eq!(EmploymentType::from_code(ty.short_code()), Some(ty));
        }
        for size in CompanySize::ALL {
            assert_eq!(CompanySize::from_code(size.short_code()), Some(size));
        }
        assert_eq!(ExperienceLevel::from_code("XX"), None);
    }
}
