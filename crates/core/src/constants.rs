//! Shared constants for passage-archive.
//!
//! Vocabularies offered by the entry form and limits shared by the HTTP and CLI layers.

/// Months in which mock exams are held, as zero-padded two-digit strings.
pub const MOCK_EXAM_MONTHS: &[&str] = &["03", "04", "06", "07", "09", "10", "11"];

/// First and last single-question item numbers on a mock exam reading section.
pub const MOCK_EXAM_SINGLE_ITEMS: (u32, u32) = (18, 40);

/// Item numbers that cover a shared passage for several questions.
pub const MOCK_EXAM_GROUPED_ITEMS: &[&str] = &["41~42", "43~45"];

/// Suffix appended to a two-digit exam year (`25` → `25년`).
pub const YEAR_SUFFIX: char = '년';

/// Suffix appended to a two-digit exam month (`06` → `06월`).
pub const MONTH_SUFFIX: char = '월';

/// Title used for a supplement record whose textbook name is blank.
pub const UNSPECIFIED_SUPPLEMENT_TITLE: &str = "unspecified supplement";

/// Title used for an external record whose source is blank.
pub const UNSPECIFIED_EXTERNAL_TITLE: &str = "unspecified external passage";

/// Item number stored for every external passage.
pub const EXTERNAL_ITEM_NUMBER: &str = "1";

/// `registered_at` format (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum number of records returned by a single listing (DoS protection).
pub const MAX_LIST_LIMIT: usize = 1000;

/// Default number of records returned when the caller gives no limit.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Default r2d2 pool size for the sheet store.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
