//! Grammar productions.
//!
//! ```text
//! workout  = { DELIMITER | TEXT | exercise } EOF
//! exercise = "#" IDENT [DELIMITER] { row } { DELIMITER } [TEXT]
//! row      = NUMBER [LABEL] "x" NUMBER [ "x" NUMBER ] [ "@" NUMBER ] DELIMITER
//! ```

mod exercise;
mod row;
