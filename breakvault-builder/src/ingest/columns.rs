//! Column resolution against ordered alias lists.
//!
//! Source spreadsheets name the same logical field differently across
//! releases ("Player" vs "Players" vs "Name"), so every field carries an
//! ordered alias list and the first alias matching a present header wins.
//! Matching is case-insensitive and ignores surrounding whitespace.

pub const PLAYER: &[&str] = &["Player", "Players", "Name"];
pub const TEAM: &[&str] = &["Team", "Team(s)", "Club"];
pub const SET: &[&str] = &["Set", "Insert", "Card Set"];
pub const CODE: &[&str] = &["Code", "Card Code", "Checklist Code"];

pub const V99: &[&str] = &["Print /99", "/99", "99"];
pub const V50: &[&str] = &["Print /50", "/50", "50"];
pub const V25: &[&str] = &["Print /25", "/25", "25"];
pub const V10: &[&str] = &["Print /10", "/10", "10"];
pub const V5: &[&str] = &["Print /5", "/5", "5"];
pub const V1: &[&str] = &["Print 1/1", "1/1", "Gold 1/1", "1"];

pub const TOTAL: &[&str] = &[
    "Total print for this checklist line",
    "Total print",
    "Total",
    "Print Run",
];

pub const BASE_SERIAL: &[&str] = &["Base serial"];
pub const PARALLELS: &[&str] = &["Parallels"];

/// Index of the first header matching any alias, in alias order.
#[must_use]
pub fn resolve(headers: &[String], aliases: &[&str]) -> Option<usize> {
    aliases.iter().find_map(|alias| {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(alias))
    })
}
