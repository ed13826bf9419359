use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray, Date32Array, Int64Array, StringArray, UInt64Array};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Date32Type, Int64Type, UInt64Type};
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::error::LoadError;
use super::model::{
    EnrichedDataset, PostRecord, RawPost, COMMENTS, CONTENT_TYPE, DATE, LIKES, PLATFORM,
    REQUIRED_COLUMNS, SHARES, VIEWS,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a source file into memory, picking its format from the extension.
/// Unsupported extensions fail before any I/O.
pub fn read_file(path: &Path) -> Result<(SourceFormat, Bytes), LoadError> {
    let format = SourceFormat::from_path(path)?;
    Ok((format, Bytes::from(fs::read(path)?)))
}

/// Load and enrich a post table from the contents of a source file.
///
/// Supported formats:
/// * `.csv`     – header row, one post per line
/// * `.json`    – `[{ "date": "2023-05-01", "platform": "...", ... }, ...]`
/// * `.parquet` – string / integer / date columns (Pandas or Polars output)
///
/// Either every row enriches or the whole load fails.
pub fn load_and_enrich(format: SourceFormat, contents: Bytes) -> Result<EnrichedDataset, LoadError> {
    match format {
        SourceFormat::Csv => read_csv(contents.as_ref()),
        SourceFormat::Json => read_json(contents.as_ref()),
        SourceFormat::Parquet => read_parquet(contents),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Json,
    Parquet,
}

impl SourceFormat {
    /// Case-insensitive match on the file extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "json" => Ok(SourceFormat::Json),
            "parquet" | "pq" => Ok(SourceFormat::Parquet),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Date parsing & enrichment
// ---------------------------------------------------------------------------

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse a year-first date or date-time. Day/month-first spellings are
/// ambiguous and rejected. Time and offset parts are discarded.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}

fn enrich_row(row: usize, raw: RawPost) -> Result<PostRecord, LoadError> {
    let date = parse_date(&raw.date)
        .ok_or_else(|| LoadError::data_format(row, DATE, format!("'{}' is not a valid date", raw.date)))?;
    build_post(
        row,
        date,
        raw.platform,
        raw.content_type,
        [raw.views, raw.likes, raw.comments, raw.shares],
    )
}

/// `counts` is `[views, likes, comments, shares]`.
fn build_post(
    row: usize,
    date: NaiveDate,
    platform: String,
    content_type: String,
    counts: [u64; 4],
) -> Result<PostRecord, LoadError> {
    let [views, likes, comments, shares] = counts;
    PostRecord::new(date, platform, content_type, views, likes, comments, shares)
        .ok_or_else(|| LoadError::data_format(row, LIKES, "likes + comments + shares overflows"))
}

fn check_columns<'a>(present: impl IntoIterator<Item = &'a str>) -> Result<(), LoadError> {
    let present: HashSet<&str> = present.into_iter().collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.contains(*col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::schema(missing))
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with at least the required column names, in any
/// order. Extra columns are ignored. Cells are trimmed.
pub fn read_csv<R: Read>(source: R) -> Result<EnrichedDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    let headers = reader.headers()?.clone();
    check_columns(headers.iter())?;

    let mut posts = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let raw: RawPost = record
            .deserialize(Some(&headers))
            .map_err(|e| csv_value_error(row_no, &headers, &e))?;
        posts.push(enrich_row(row_no, raw)?);
    }

    Ok(EnrichedDataset::from_posts(posts))
}

fn csv_value_error(row: usize, headers: &csv::StringRecord, err: &csv::Error) -> LoadError {
    match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => {
            let column = err
                .field()
                .and_then(|idx| headers.get(idx as usize))
                .unwrap_or("?");
            LoadError::data_format(row, column, err.kind().to_string())
        }
        _ => LoadError::data_format(row, "?", err.to_string()),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (an array of records):
///
/// ```json
/// [
///   { "date": "2023-05-01", "platform": "TikTok", "content_type": "Video",
///     "views": 1200, "likes": 80, "comments": 12, "shares": 9 },
///   ...
/// ]
/// ```
///
/// `date` is either a date string or an integer count of milliseconds since
/// the Unix epoch (UTC), which is how pandas `to_json(orient='records')`
/// writes datetime columns by default.
///
/// The first record defines the schema; later records missing a field are
/// reported as bad values for that row.
pub fn read_json<R: Read>(source: R) -> Result<EnrichedDataset, LoadError> {
    let root: JsonValue = serde_json::from_reader(source)?;
    let records = root.as_array().ok_or_else(|| {
        LoadError::data_format(0, "?", "expected a top-level JSON array of records")
    })?;

    if let Some(first) = records.first().and_then(JsonValue::as_object) {
        check_columns(first.keys().map(String::as_str))?;
    }

    let mut posts = Vec::with_capacity(records.len());
    for (row, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| LoadError::data_format(row, "?", "record is not a JSON object"))?;

        let raw = RawPost {
            date: json_date(obj, row)?,
            platform: json_str(obj, row, PLATFORM)?,
            content_type: json_str(obj, row, CONTENT_TYPE)?,
            views: json_count(obj, row, VIEWS)?,
            likes: json_count(obj, row, LIKES)?,
            comments: json_count(obj, row, COMMENTS)?,
            shares: json_count(obj, row, SHARES)?,
        };
        posts.push(enrich_row(row, raw)?);
    }

    Ok(EnrichedDataset::from_posts(posts))
}

fn json_str(obj: &Map<String, JsonValue>, row: usize, col: &str) -> Result<String, LoadError> {
    match obj.get(col) {
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(JsonValue::Null) | None => Err(LoadError::data_format(row, col, "missing value")),
        Some(other) => Err(LoadError::data_format(row, col, format!("expected a string, got {other}"))),
    }
}

fn json_date(obj: &Map<String, JsonValue>, row: usize) -> Result<String, LoadError> {
    match obj.get(DATE) {
        Some(JsonValue::Number(n)) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|ts| ts.date_naive().format("%Y-%m-%d").to_string())
            .ok_or_else(|| {
                LoadError::data_format(row, DATE, format!("'{n}' is not an epoch-millisecond timestamp"))
            }),
        _ => json_str(obj, row, DATE),
    }
}

fn json_count(obj: &Map<String, JsonValue>, row: usize, col: &str) -> Result<u64, LoadError> {
    match obj.get(col) {
        Some(JsonValue::Null) | None => Err(LoadError::data_format(row, col, "missing value")),
        Some(v) => v.as_u64().ok_or_else(|| {
            LoadError::data_format(row, col, format!("'{v}' is not a non-negative integer"))
        }),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file of posts.
///
/// Expected schema:
/// - `date`: Utf8 / LargeUtf8 text, or Date32 / Date64 / Timestamp
/// - `platform`, `content_type`: any type castable to Utf8 (incl. dictionaries)
/// - `views`, `likes`, `comments`, `shares`: any integer type, signed or unsigned
pub fn read_parquet(contents: Bytes) -> Result<EnrichedDataset, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(contents)?;
    check_columns(builder.schema().fields().iter().map(|f| f.name().as_str()))?;
    let reader = builder.build()?;

    let mut posts = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;
        let offset = posts.len();
        let columns = PostColumns::from_batch(&batch)?;
        for row in 0..batch.num_rows() {
            posts.push(columns.post(row, offset + row)?);
        }
    }

    Ok(EnrichedDataset::from_posts(posts))
}

enum DateColumn {
    Text(StringArray),
    Native(Date32Array),
}

/// Signed sources keep their sign so negatives can be reported; everything
/// else is read as `u64` so values above `i64::MAX` survive.
enum CountColumn {
    Signed(Int64Array),
    Unsigned(UInt64Array),
}

impl CountColumn {
    fn value_at(&self, row: usize, abs_row: usize, col: &str) -> Result<u64, LoadError> {
        match self {
            CountColumn::Signed(arr) if arr.is_valid(row) => {
                let value = arr.value(row);
                u64::try_from(value)
                    .map_err(|_| LoadError::data_format(abs_row, col, format!("negative count {value}")))
            }
            CountColumn::Unsigned(arr) if arr.is_valid(row) => Ok(arr.value(row)),
            _ => Err(LoadError::data_format(abs_row, col, "missing or out-of-range value")),
        }
    }
}

/// The required columns of one record batch, cast to uniform types.
struct PostColumns {
    date: DateColumn,
    platform: StringArray,
    content_type: StringArray,
    /// views, likes, comments, shares
    counts: [(CountColumn, &'static str); 4],
}

impl PostColumns {
    fn from_batch(batch: &RecordBatch) -> Result<Self, LoadError> {
        let raw_date = column(batch, DATE)?;
        let date = match raw_date.data_type() {
            DataType::Date32 | DataType::Date64 | DataType::Timestamp(_, _) => DateColumn::Native(
                cast(raw_date, &DataType::Date32)?
                    .as_primitive::<Date32Type>()
                    .clone(),
            ),
            _ => DateColumn::Text(text_column(batch, DATE)?),
        };

        Ok(PostColumns {
            date,
            platform: text_column(batch, PLATFORM)?,
            content_type: text_column(batch, CONTENT_TYPE)?,
            counts: [
                (count_column(batch, VIEWS)?, VIEWS),
                (count_column(batch, LIKES)?, LIKES),
                (count_column(batch, COMMENTS)?, COMMENTS),
                (count_column(batch, SHARES)?, SHARES),
            ],
        })
    }

    /// Build the post at batch-local `row`; errors report the file-wide `abs_row`.
    fn post(&self, row: usize, abs_row: usize) -> Result<PostRecord, LoadError> {
        let date = match &self.date {
            DateColumn::Native(arr) if arr.is_valid(row) => arr.value_as_date(row),
            DateColumn::Native(_) => None,
            DateColumn::Text(arr) if arr.is_valid(row) => parse_date(arr.value(row)),
            DateColumn::Text(_) => None,
        }
        .ok_or_else(|| LoadError::data_format(abs_row, DATE, "missing or invalid date"))?;

        let platform = text_at(&self.platform, row, abs_row, PLATFORM)?;
        let content_type = text_at(&self.content_type, row, abs_row, CONTENT_TYPE)?;

        let mut counts = [0u64; 4];
        for (slot, (arr, name)) in counts.iter_mut().zip(&self.counts) {
            *slot = arr.value_at(row, abs_row, name)?;
        }

        build_post(abs_row, date, platform, content_type, counts)
    }
}

fn column<'b>(batch: &'b RecordBatch, name: &str) -> Result<&'b ArrayRef, LoadError> {
    batch
        .column_by_name(name)
        .ok_or_else(|| LoadError::schema(vec![name.to_string()]))
}

fn text_column(batch: &RecordBatch, name: &str) -> Result<StringArray, LoadError> {
    Ok(cast(column(batch, name)?, &DataType::Utf8)?.as_string::<i32>().clone())
}

fn count_column(batch: &RecordBatch, name: &str) -> Result<CountColumn, LoadError> {
    let raw = column(batch, name)?;
    Ok(match raw.data_type() {
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 => CountColumn::Signed(
            cast(raw, &DataType::Int64)?.as_primitive::<Int64Type>().clone(),
        ),
        _ => CountColumn::Unsigned(cast(raw, &DataType::UInt64)?.as_primitive::<UInt64Type>().clone()),
    })
}

fn text_at(arr: &StringArray, row: usize, abs_row: usize, col: &str) -> Result<String, LoadError> {
    if arr.is_null(row) {
        return Err(LoadError::data_format(abs_row, col, "missing value"));
    }
    Ok(arr.value(row).to_string())
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::Int32Array;
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const HEADER: &str = "date,platform,content_type,views,likes,comments,shares";

    fn load_path(path: &Path) -> Result<EnrichedDataset, LoadError> {
        let (format, contents) = read_file(path)?;
        load_and_enrich(format, contents)
    }

    fn csv(body: &str) -> String {
        format!("{HEADER}\n{body}")
    }

    fn parquet_bytes(batch: &RecordBatch) -> Bytes {
        let mut buf = Vec::new();
        let mut writer = ArrowWriter::try_new(&mut buf, batch.schema(), None).unwrap();
        writer.write(batch).unwrap();
        writer.close().unwrap();
        Bytes::from(buf)
    }

    /// Text dates, text categories and the given count columns.
    fn text_date_batch(dates: Vec<&str>, counts: [(DataType, ArrayRef); 4]) -> RecordBatch {
        let n = dates.len();
        let mut fields = vec![
            Field::new(DATE, DataType::Utf8, false),
            Field::new(PLATFORM, DataType::Utf8, false),
            Field::new(CONTENT_TYPE, DataType::Utf8, false),
        ];
        let mut columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(dates)),
            Arc::new(StringArray::from(vec!["X"; n])),
            Arc::new(StringArray::from(vec!["Video"; n])),
        ];
        for (name, (data_type, array)) in [VIEWS, LIKES, COMMENTS, SHARES].into_iter().zip(counts) {
            fields.push(Field::new(name, data_type, false));
            columns.push(array);
        }
        RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).unwrap()
    }

    #[rstest]
    #[case("2023-05-14", Some((2023, 5, 14)))]
    #[case(" 2023-05-14 ", Some((2023, 5, 14)))]
    #[case("2023/05/14", Some((2023, 5, 14)))]
    #[case("2023-05-14 08:30:00", Some((2023, 5, 14)))]
    #[case("2023-05-14T08:30:00.250", Some((2023, 5, 14)))]
    #[case("2023-05-31T23:00:00-05:00", Some((2023, 5, 31)))]
    #[case("", None)]
    #[case("14/05/2023", None)]
    #[case("2023-02-30", None)]
    #[case("yesterday", None)]
    fn parses_year_first_dates(#[case] text: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let expected = expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(parse_date(text), expected);
    }

    #[test]
    fn csv_enriches_every_row() {
        let src = csv(
            "2023-05-01,X,Video,10,3,4,5\n\
             2023-05-02,Y,Image,20,1,0,0\n\
             2024-01-09,X,Reel,5,0,0,2\n",
        );
        let ds = read_csv(src.as_bytes()).unwrap();

        assert_eq!(ds.len(), 3);
        for p in &ds.posts {
            assert_eq!(p.engagement, p.likes + p.comments + p.shares);
        }
        assert_eq!(ds.posts[0].engagement, 12);
        assert_eq!((ds.posts[2].year, ds.posts[2].month), (2024, 1));
    }

    #[test]
    fn csv_accepts_reordered_and_extra_columns() {
        let src = "shares,post_id,likes,comments,views,content_type,platform,date\n\
                   1,abc,2,3,100,Story,TikTok,2022-12-31\n";
        let ds = read_csv(src.as_bytes()).unwrap();
        let p = &ds.posts[0];
        assert_eq!((p.platform.as_str(), p.content_type.as_str()), ("TikTok", "Story"));
        assert_eq!((p.views, p.engagement), (100, 6));
    }

    #[test]
    fn csv_missing_columns_is_schema_error() {
        let src = "date,platform,views,likes\n2023-05-01,X,1,1\n";
        match read_csv(src.as_bytes()) {
            Err(LoadError::Schema { missing }) => {
                assert_eq!(missing, vec!["content_type", "comments", "shares"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn csv_empty_date_fails_whole_load() {
        let src = csv("2023-05-01,X,Video,1,1,1,1\n,Y,Video,1,1,1,1\n");
        match read_csv(src.as_bytes()) {
            Err(LoadError::DataFormat { row, column, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "date");
            }
            other => panic!("expected data format error, got {other:?}"),
        }
    }

    #[test]
    fn csv_negative_count_names_column() {
        let src = csv("2023-05-01,X,Video,1,-4,1,1\n");
        match read_csv(src.as_bytes()) {
            Err(LoadError::DataFormat { row, column, .. }) => {
                assert_eq!((row, column.as_str()), (0, "likes"));
            }
            other => panic!("expected data format error, got {other:?}"),
        }
    }

    #[test]
    fn csv_header_only_gives_empty_dataset() {
        let ds = read_csv(format!("{HEADER}\n").as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert!(ds.distinct_years().is_empty());
    }

    #[test]
    fn json_records_load() {
        let src = r#"[
            {"date": "2023-06-01", "platform": "YouTube", "content_type": "Video",
             "views": 500, "likes": 3, "comments": 4, "shares": 5, "caption": "hi"},
            {"date": "2023-06-02 10:00:00", "platform": "Instagram", "content_type": "Image",
             "views": 50, "likes": 1, "comments": 1, "shares": 1}
        ]"#;
        let ds = read_json(src.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.posts[0].engagement, 12);
        assert_eq!(ds.posts[1].date, NaiveDate::from_ymd_opt(2023, 6, 2).unwrap());
    }

    #[test]
    fn json_epoch_millisecond_dates() {
        let src = r#"[
            {"date": 1683072000000, "platform": "YouTube", "content_type": "Video",
             "views": 5, "likes": 1, "comments": 0, "shares": 0},
            {"date": "2023-05-04T00:00:00.000Z", "platform": "YouTube", "content_type": "Video",
             "views": 5, "likes": 1, "comments": 0, "shares": 0}
        ]"#;
        let ds = read_json(src.as_bytes()).unwrap();
        assert_eq!(ds.posts[0].date, NaiveDate::from_ymd_opt(2023, 5, 3).unwrap());
        assert_eq!(ds.posts[1].date, NaiveDate::from_ymd_opt(2023, 5, 4).unwrap());
        assert_eq!(ds.distinct_months().iter().copied().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn json_fractional_timestamp_is_rejected() {
        let src = r#"[{"date": 1683072000000.5, "platform": "YouTube", "content_type": "Video",
                      "views": 1, "likes": 1, "comments": 1, "shares": 1}]"#;
        assert!(matches!(
            read_json(src.as_bytes()),
            Err(LoadError::DataFormat { row: 0, ref column, .. }) if column == "date"
        ));
    }

    #[test]
    fn json_missing_key_is_schema_error() {
        let src = r#"[{"date": "2023-06-01", "platform": "YouTube", "views": 1,
                      "likes": 1, "comments": 1, "shares": 1}]"#;
        match read_json(src.as_bytes()) {
            Err(LoadError::Schema { missing }) => assert_eq!(missing, vec!["content_type"]),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn json_fractional_count_is_rejected() {
        let src = r#"[{"date": "2023-06-01", "platform": "YouTube", "content_type": "Video",
                      "views": 1.5, "likes": 1, "comments": 1, "shares": 1}]"#;
        assert!(matches!(
            read_json(src.as_bytes()),
            Err(LoadError::DataFormat { ref column, .. }) if column == "views"
        ));
    }

    #[test]
    fn load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let path = dir.path().join("posts.CSV");
        let mut f = File::create(&path).unwrap();
        write!(f, "{}", csv("2023-05-01,X,Video,10,1,1,1\n")).unwrap();
        assert_eq!(load_path(&path).unwrap().len(), 1);

        let path = dir.path().join("posts.xlsx");
        File::create(&path).unwrap();
        assert!(matches!(
            load_path(&path),
            Err(LoadError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn parquet_with_native_dates_and_mixed_int_widths() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let days = |y, m, d| (NaiveDate::from_ymd_opt(y, m, d).unwrap() - epoch).num_days() as i32;

        let schema = Arc::new(Schema::new(vec![
            Field::new(DATE, DataType::Date32, false),
            Field::new(PLATFORM, DataType::Utf8, false),
            Field::new(CONTENT_TYPE, DataType::Utf8, false),
            Field::new(VIEWS, DataType::Int64, false),
            Field::new(LIKES, DataType::Int32, false),
            Field::new(COMMENTS, DataType::Int32, false),
            Field::new(SHARES, DataType::Int32, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Date32Array::from(vec![days(2023, 5, 1), days(2024, 2, 29)])),
                Arc::new(StringArray::from(vec!["X", "Y"])),
                Arc::new(StringArray::from(vec!["Video", "Reel"])),
                Arc::new(Int64Array::from(vec![10, 20])),
                Arc::new(Int32Array::from(vec![3, 0])),
                Arc::new(Int32Array::from(vec![4, 1])),
                Arc::new(Int32Array::from(vec![5, 1])),
            ],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.parquet");
        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_path(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.posts[0].engagement, 12);
        assert_eq!((ds.posts[1].year, ds.posts[1].month), (2024, 2));
        assert_eq!(ds.posts[1].views, 20);
    }

    #[test]
    fn parquet_missing_column_is_schema_error() {
        let schema = Arc::new(Schema::new(vec![
            Field::new(DATE, DataType::Utf8, false),
            Field::new(PLATFORM, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["2023-05-01"])),
                Arc::new(StringArray::from(vec!["X"])),
            ],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.pq");
        let mut writer = ArrowWriter::try_new(File::create(&path).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        match load_path(&path) {
            Err(LoadError::Schema { missing }) => assert_eq!(missing.len(), 5),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn parquet_text_dates_and_unsigned_counts() {
        let batch = text_date_batch(
            vec!["2023-05-01", "2023-06-15 08:00:00"],
            [
                (DataType::UInt64, Arc::new(UInt64Array::from(vec![u64::MAX, 7]))),
                (DataType::UInt64, Arc::new(UInt64Array::from(vec![1, 2]))),
                (DataType::UInt64, Arc::new(UInt64Array::from(vec![0, 3]))),
                (DataType::UInt64, Arc::new(UInt64Array::from(vec![0, 4]))),
            ],
        );

        let ds = read_parquet(parquet_bytes(&batch)).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.posts[0].views, u64::MAX);
        assert_eq!((ds.posts[1].year, ds.posts[1].month), (2023, 6));
        assert_eq!(ds.posts[1].engagement, 9);
    }

    #[test]
    fn parquet_negative_count_reports_row_and_column() {
        let batch = text_date_batch(
            vec!["2023-05-01", "2023-05-02"],
            [
                (DataType::Int64, Arc::new(Int64Array::from(vec![10, 10]))),
                (DataType::Int64, Arc::new(Int64Array::from(vec![1, -3]))),
                (DataType::Int64, Arc::new(Int64Array::from(vec![0, 0]))),
                (DataType::Int64, Arc::new(Int64Array::from(vec![0, 0]))),
            ],
        );

        match read_parquet(parquet_bytes(&batch)) {
            Err(LoadError::DataFormat { row, column, reason }) => {
                assert_eq!((row, column.as_str()), (1, "likes"));
                assert!(reason.contains("-3"), "{reason}");
            }
            other => panic!("expected data format error, got {other:?}"),
        }
    }

    #[test]
    fn parquet_empty_date_reports_row_and_column() {
        let zeros = || -> (DataType, ArrayRef) { (DataType::Int32, Arc::new(Int32Array::from(vec![0; 3]))) };
        let batch = text_date_batch(
            vec!["2023-05-01", "2023-05-02", ""],
            [zeros(), zeros(), zeros(), zeros()],
        );

        match read_parquet(parquet_bytes(&batch)) {
            Err(LoadError::DataFormat { row, column, .. }) => {
                assert_eq!((row, column.as_str()), (2, "date"));
            }
            other => panic!("expected data format error, got {other:?}"),
        }
    }
}
