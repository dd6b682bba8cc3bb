use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{
    CompanySize, EmploymentType, ExperienceLevel, SalaryDataset, SalaryRecord,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a salary dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `[{ "work_year": 2023, "experience_level": "SE", ... }, ...]`
/// * `.csv`     – header row with the same column names
/// * `.parquet` – flat scalar columns with the same names
pub fn load_file(path: &Path) -> Result<SalaryDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the dataset's native interchange
/// form):
///
/// ```json
/// [
///   {
///     "work_year": 2023,
///     "experience_level": "SE",
///     "employment_type": "FT",
///     "job_title": "Data Scientist",
///     "salary_in_usd": 152000,
///     "company_size": "M",
///     "company_location": "US"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<SalaryDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<SalaryRecord> =
        serde_json::from_str(&text).context("parsing JSON records")?;
    Ok(SalaryDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the record fields; categorical columns use
/// the dataset's short codes (`SE`, `FT`, `M`, …). Extra columns are ignored.
fn load_csv(path: &Path) -> Result<SalaryDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<SalaryRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(SalaryDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing the salary table.
///
/// Expected schema: one scalar column per record field –
/// `work_year` (int), `experience_level` / `employment_type` /
/// `company_size` / `company_location` / `job_title` (utf8),
/// `salary_in_usd` (int or float). Extra columns are ignored.
fn load_parquet(path: &Path) -> Result<SalaryDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let work_year = column(&batch, "work_year")?;
        let experience = column(&batch, "experience_level")?;
        let employment = column(&batch, "employment_type")?;
        let job_title = column(&batch, "job_title")?;
        let salary = column(&batch, "salary_in_usd")?;
        let company_size = column(&batch, "company_size")?;
        let location = column(&batch, "company_location")?;

        for row in 0..batch.num_rows() {
            let exp_code = string_at(experience, row)
                .with_context(|| format!("Row {row}: experience_level"))?;
            let emp_code = string_at(employment, row)
                .with_context(|| format!("Row {row}: employment_type"))?;
            let size_code = string_at(company_size, row)
                .with_context(|| format!("Row {row}: company_size"))?;

            records.push(SalaryRecord {
                work_year: int_at(work_year, row)
                    .with_context(|| format!("Row {row}: work_year"))? as i32,
                experience_level: ExperienceLevel::from_code(&exp_code)
                    .with_context(|| format!("Row {row}: unknown experience level '{exp_code}'"))?,
                employment_type: EmploymentType::from_code(&emp_code)
                    .with_context(|| format!("Row {row}: unknown employment type '{emp_code}'"))?,
                job_title: string_at(job_title, row)
                    .with_context(|| format!("Row {row}: job_title"))?,
                salary_in_usd: float_at(salary, row)
                    .with_context(|| format!("Row {row}: salary_in_usd"))?,
                company_size: CompanySize::from_code(&size_code)
                    .with_context(|| format!("Row {row}: unknown company size '{size_code}'"))?,
                company_location: string_at(location, row)
                    .with_context(|| format!("Row {row}: company_location"))?,
            });
        }
    }

    Ok(SalaryDataset::from_records(records))
}

// -- Arrow column helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn string_at(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn int_at(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        other => bail!("Expected integer column, got {other:?}"),
    }
}

fn float_at(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    match col.data_type() {
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(arr.value(row))
        }
        // Salary columns are frequently written as integers.
        DataType::Int32 | DataType::Int64 => int_at(col, row).map(|v| v as f64),
        other => bail!("Expected numeric column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CompanySize, EmploymentType, ExperienceLevel};

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).expect("writing test fixture");
        path
    }

    #[test]
    fn loads_json_records() {
        let path = write_temp(
            "datapay_loader_test.json",
            r#"[
                {"work_year": 2023, "experience_level": "SE", "employment_type": "FT",
                 "job_title": "Data Scientist", "salary_in_usd": 152000,
                 "company_size": "M", "company_location": "US",
                 "salary_currency": "USD"},
                {"work_year": 2021, "experience_level": "EN", "employment_type": "PT",
                 "job_title": "Data Analyst", "salary_in_usd": 42000.5,
                 "company_size": "S", "company_location": "GB"}
            ]"#,
        );

        let ds = load_file(&path).expect("loading JSON fixture");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].work_year, 2023);
        assert_eq!(ds.records[0].experience_level, ExperienceLevel::Senior);
        assert_eq!(ds.records[1].employment_type, EmploymentType::PartTime);
        assert_eq!(ds.records[1].company_size, CompanySize::Small);
        assert_eq!(ds.records[1].salary_in_usd, 42000.5);
        assert_eq!(ds.years, vec![2021, 2023]);
    }

    #[test]
    fn loads_csv_records() {
        let path = write_temp(
            "datapay_loader_test.csv",
            "work_year,experience_level,employment_type,job_title,salary_in_usd,company_size,company_location\n\
             2022,MI,FT,Data Engineer,110000,L,DE\n\
             2023,EX,CT,Data Architect,210000,L,US\n",
        );

        let ds = load_file(&path).expect("loading CSV fixture");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].experience_level, ExperienceLevel::Mid);
        assert_eq!(ds.records[1].employment_type, EmploymentType::Contract);
        assert_eq!(ds.records[1].salary_in_usd, 210000.0);
    }

    #[test]
    fn rejects_unknown_extension() {
        let path = write_temp("datapay_loader_test.xlsx", "not a table");
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn rejects_malformed_json() {
        let path = write_temp("datapay_loader_bad.json", r#"{"not": "an array"}"#);
        assert!(load_file(&path).is_err());
    }
}
