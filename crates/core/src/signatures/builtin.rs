//! Built-in signature tables.
//!
//! Order within each table is precedence order. Do not sort.

/// Byte-order marks for text encodings.
///
/// UTF-32LE must stay ahead of UTF-16LE: `FF FE 00 00` starts with `FF FE`.
pub const TEXT_SIGNATURES: &[(&str, &[&str])] = &[
    ("UTF32-LE", &["FF-FE-00-00"]),
    ("UTF32-BE", &["00-00-FE-FF"]),
    ("UTF8", &["EF-BB-BF"]),
    ("UTF16-LE", &["FF-FE"]),
    ("UTF16-BE", &["FE-FF"]),
    ("UTF7", &["2B-2F-76-38", "2B-2F-76-39", "2B-2F-76-2B", "2B-2F-76-2F"]),
    ("UTF1", &["F7-64-4C"]),
    ("UTF-EBCDIC", &["DD-73-66-73"]),
    ("SCSU", &["0E-FE-FF"]),
    ("BOCU-1", &["FB-EE-28"]),
    ("GB-18030", &["84-31-95-33"]),
];

/// Magic numbers for binary container formats, appended after the text block.
///
/// MSEXE and ZIP are two-byte generic prefixes and stay last so the longer
/// signatures sharing their leading bytes (MSEXCEL's `50 4B 03 04 ...`) win.
pub const BINARY_SIGNATURES: &[(&str, &[&str])] = &[
    ("LNK", &["4C-00-00-00-01-14-02-00"]),
    ("MSEXCEL", &["50-4B-03-04-14-00-06-00"]),
    ("PNG", &["89-50-4E-47-0D-0A-1A-0A"]),
    ("MSOFFICE", &["D0-CF-11-E0-A1-B1-1A-E1"]),
    ("7ZIP", &["37-7A-BC-AF-27-1C"]),
    ("RTF", &["7B-5C-72-74-66-31"]),
    ("GIF", &["47-49-46-38"]),
    ("REGPOL", &["50-52-65-67"]),
    ("GZIP", &["1F-8B"]),
    ("JPEG", &["FF-D8-FF"]),
    ("MSEXE", &["4D-5A"]),
    ("ZIP", &["50-4B"]),
];
