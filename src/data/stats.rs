use std::collections::{BTreeMap, HashMap};

use super::model::{ExperienceLevel, SalaryRecord};

/// Job titles rarer than this are folded into [`OTHERS_LABEL`] in the
/// share breakdown.
pub const MIN_TITLE_COUNT: usize = 50;

/// Bucket label for folded low-frequency titles.
pub const OTHERS_LABEL: &str = "Others";

/// How many titles the ranked panels show.
pub const TOP_TITLES: usize = 10;

// ---------------------------------------------------------------------------
// Quantile helpers
// ---------------------------------------------------------------------------

fn sorted_values(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values
}

/// Linear-interpolation quantile over pre-sorted values (the pandas
/// convention). Returns NaN for an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Median over pre-sorted values: average of the two middle values for an
/// even count.
pub fn median(sorted: &[f64]) -> f64 {
    quantile(sorted, 0.5)
}

// ---------------------------------------------------------------------------
// Group-by helpers
// ---------------------------------------------------------------------------

/// Group salaries by job title, preserving first-appearance order so that
/// downstream stable sorts break ties the way the input does.
fn salaries_by_title(records: &[SalaryRecord]) -> Vec<(String, Vec<f64>)> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for rec in records {
        let slot = *index.entry(rec.job_title.clone()).or_insert_with(|| {
            groups.push((rec.job_title.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(rec.salary_in_usd);
    }
    groups
}

// ---------------------------------------------------------------------------
// Panel aggregates
// ---------------------------------------------------------------------------

/// Mean salary for one work year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyMean {
    pub year: i32,
    pub mean_salary: f64,
}

/// mean(salary_in_usd) grouped by work_year, ascending by year.
pub fn mean_salary_by_year(records: &[SalaryRecord]) -> Vec<YearlyMean> {
    let mut by_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for rec in records {
        let entry = by_year.entry(rec.work_year).or_insert((0.0, 0));
        entry.0 += rec.salary_in_usd;
        entry.1 += 1;
    }
    by_year
        .into_iter()
        .map(|(year, (sum, n))| YearlyMean {
            year,
            mean_salary: sum / n as f64,
        })
        .collect()
}

/// A job title paired with an aggregated salary value.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleValue {
    pub title: String,
    pub value: f64,
}

/// median(salary_in_usd) grouped by job_title, descending, top `n`.
/// Ties keep the order titles first appear in the input.
pub fn top_titles_by_median_salary(records: &[SalaryRecord], n: usize) -> Vec<TitleValue> {
    let mut rows: Vec<TitleValue> = salaries_by_title(records)
        .into_iter()
        .map(|(title, values)| {
            let sorted = sorted_values(values);
            TitleValue {
                title,
                value: median(&sorted),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows.truncate(n);
    rows
}

/// Five-number summary of a salary distribution, with whiskers at the most
/// extreme points within 1.5×IQR of the quartile hinges.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    /// Points beyond the whisker fences.
    pub outliers: Vec<f64>,
}

/// Compute the box summary of a value set; `None` when empty.
pub fn box_summary(values: Vec<f64>) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted_values(values);
    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let lo_fence = q1 - 1.5 * iqr;
    let hi_fence = q3 + 1.5 * iqr;

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|v| *v >= lo_fence)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= hi_fence)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < lo_fence || *v > hi_fence)
        .collect();

    Some(BoxSummary {
        lower_whisker,
        q1,
        median: median(&sorted),
        q3,
        upper_whisker,
        outliers,
    })
}

/// Box summary of salary_in_usd per experience level, in the level's
/// declared order. Levels with no records are omitted.
pub fn salary_distribution_by_experience(
    records: &[SalaryRecord],
) -> Vec<(ExperienceLevel, BoxSummary)> {
    ExperienceLevel::ALL
        .iter()
        .filter_map(|level| {
            let values: Vec<f64> = records
                .iter()
                .filter(|r| r.experience_level == *level)
                .map(|r| r.salary_in_usd)
                .collect();
            box_summary(values).map(|summary| (*level, summary))
        })
        .collect()
}

/// A job title paired with a posting count.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCount {
    pub title: String,
    pub count: usize,
}

/// count grouped by job_title, preserving first-appearance order.
fn count_by_title(records: &[SalaryRecord]) -> Vec<TitleCount> {
    let mut counts: Vec<TitleCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for rec in records {
        let slot = *index.entry(rec.job_title.clone()).or_insert_with(|| {
            counts.push(TitleCount {
                title: rec.job_title.clone(),
                count: 0,
            });
            counts.len() - 1
        });
        counts[slot].count += 1;
    }
    counts
}

/// count grouped by job_title, descending, top `n`; ties keep input order.
pub fn top_titles_by_count(records: &[SalaryRecord], n: usize) -> Vec<TitleCount> {
    let mut counts = count_by_title(records);
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Share breakdown per job title: titles with fewer than `min_count`
/// postings are folded into a single [`OTHERS_LABEL`] bucket, then the
/// whole breakdown is ordered descending by count.
pub fn job_title_shares(records: &[SalaryRecord], min_count: usize) -> Vec<TitleCount> {
    let mut shares: Vec<TitleCount> = Vec::new();
    let mut folded = 0usize;

    for tc in count_by_title(records) {
        if tc.count < min_count {
            folded += tc.count;
        } else {
            shares.push(tc);
        }
    }
    if folded > 0 {
        shares.push(TitleCount {
            title: OTHERS_LABEL.to_string(),
            count: folded,
        });
    }

    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CompanySize, EmploymentType};

    fn record(year: i32, title: &str, level: ExperienceLevel, salary: f64) -> SalaryRecord {
        SalaryRecord {
            work_year: year,
            experience_level: level,
            employment_type: EmploymentType::FullTime,
            job_title: title.to_string(),
            salary_in_usd: salary,
            company_size: CompanySize::Medium,
            company_location: "US".to_string(),
        }
    }

    fn rows(template: &[(i32, &str, f64)]) -> Vec<SalaryRecord> {
        template.iter()
            .map(|(year, title, salary)| record(*year, title, ExperienceLevel::Senior, *salary))
            .collect()
    }

    #[test]
    fn mean_by_year_matches_manual_recomputation() {
        let records = rows(&[
            (2021, "A", 100.0),
            (2021, "A", 200.0),
            (2023, "B", 90.0),
            (2022, "B", 50.0),
            (2022, "C", 70.0),
        ]);
        let means = mean_salary_by_year(&records);
        assert_eq!(means.len(), 3);
        assert_eq!(means[0], YearlyMean { year: 2021, mean_salary: 150.0 });
        assert_eq!(means[1], YearlyMean { year: 2022, mean_salary: 60.0 });
        assert_eq!(means[2], YearlyMean { year: 2023, mean_salary: 90.0 });
    }

    #[test]
    fn mean_by_year_empty_input() {
        assert!(mean_salary_by_year(&[]).is_empty());
    }

    #[test]
    fn median_uses_two_middle_average() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert!(median(&[]).is_nan());
    }

    #[test]
    fn quantile_interpolates_linearly() {
        let values = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile(&values, 0.0), 10.0);
        assert_eq!(quantile(&values, 0.25), 17.5);
        assert_eq!(quantile(&values, 0.75), 32.5);
        assert_eq!(quantile(&values, 1.0), 40.0);
    }

    #[test]
    fn top_median_is_descending_with_input_order_ties() {
        let records = rows(&[
            // "Mid" appears before "Late" in the input; both have median 100.
            (2023, "Top", 300.0),
            (2023, "Mid", 100.0),
            (2023, "Late", 100.0),
            (2023, "Low", 10.0),
        ]);
        let top = top_titles_by_median_salary(&records, 3);
        let titles: Vec<&str> = top.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Top", "Mid", "Late"]);
        assert!(top.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn top_median_takes_group_median_not_mean() {
        let records = rows(&[
            (2023, "A", 100.0),
            (2023, "A", 100.0),
            (2023, "A", 1000.0),
            (2023, "B", 150.0),
        ]);
        let top = top_titles_by_median_salary(&records, 10);
        // A's median is 100 even though its mean is 400.
        assert_eq!(top[0].title, "B");
        assert_eq!(top[0].value, 150.0);
        assert_eq!(top[1].value, 100.0);
    }

    #[test]
    fn shares_fold_rare_titles_into_others() {
        let mut template = Vec::new();
        for _ in 0..60 {
            template.push((2023, "A", 100.0));
        }
        for _ in 0..10 {
            template.push((2023, "B", 100.0));
        }
        let shares = job_title_shares(&rows(&template), 50);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].title, "A");
        assert_eq!(shares[0].count, 60);
        assert_eq!(shares[1].title, OTHERS_LABEL);
        assert_eq!(shares[1].count, 10);
    }

    #[test]
    fn shares_keep_titles_at_threshold() {
        let mut template = Vec::new();
        for _ in 0..50 {
            template.push((2023, "Exactly", 100.0));
        }
        for _ in 0..49 {
            template.push((2023, "Under", 100.0));
        }
        let shares = job_title_shares(&rows(&template), 50);
        assert!(shares.iter().any(|s| s.title == "Exactly"));
        assert!(shares.iter().all(|s| s.title != "Under"));
        let others = shares.iter().find(|s| s.title == OTHERS_LABEL).expect("others bucket");
        assert_eq!(others.count, 49);
    }

    #[test]
    fn top_counts_rank_descending() {
        let records = rows(&[
            (2023, "A", 1.0),
            (2023, "B", 1.0),
            (2023, "B", 1.0),
            (2023, "C", 1.0),
            (2023, "C", 1.0),
            (2023, "C", 1.0),
        ]);
        let top = top_titles_by_count(&records, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], TitleCount { title: "C".to_string(), count: 3 });
        assert_eq!(top[1], TitleCount { title: "B".to_string(), count: 2 });
    }

    #[test]
    fn box_summary_flags_outliers() {
        // 1..=9 plus one far point; fences are well inside 100.
        let mut values: Vec<f64> = (1..=9).map(|v| v as f64).collect();
        values.push(100.0);
        let summary = box_summary(values).expect("non-empty");
        assert_eq!(summary.outliers, vec![100.0]);
        assert_eq!(summary.upper_whisker, 9.0);
        assert_eq!(summary.lower_whisker, 1.0);
        assert!(summary.q1 < summary.median && summary.median < summary.q3);
    }

    #[test]
    fn box_summary_empty_is_none() {
        assert!(box_summary(Vec::new()).is_none());
    }

    #[test]
    fn distribution_follows_declared_level_order() {
        let records = vec![
            record(2023, "A", ExperienceLevel::Senior, 150.0),
            record(2023, "A", ExperienceLevel::Entry, 50.0),
            record(2023, "A", ExperienceLevel::Entry, 60.0),
        ];
        let dist = salary_distribution_by_experience(&records);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].0, ExperienceLevel::Entry);
        assert_eq!(dist[0].1.median, 55.0);
        assert_eq!(dist[1].0, ExperienceLevel::Senior);
    }
}
