use std::path::PathBuf;

use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::climate::{FanMode, Mode};

use super::waveform::{Waveform, WaveformError};


#[derive(Error, Debug)]
pub enum TableError {
    #[error("invalid temperature range {min}..={max}")]
    Range {
        min: u8,
        max: u8
    },
    #[error("{kind} table has {actual} codes, expected {expected}")]
    Length {
        kind: TableKind,
        expected: usize,
        actual: usize
    },
    #[error("{kind} code {index}: {source}")]
    Waveform {
        kind: TableKind,
        index: usize,
        #[source]
        source: WaveformError
    },
    #[error("code book needs either a cool table or both cool_silent and cool_auto tables")]
    MissingCool,
    #[error("code book has both a cool table and cool_silent/cool_auto tables")]
    AmbiguousCool,
    #[error("failed to read code book {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: config::ConfigError
    },
}


/// Identifies one table (or fixed code) of a [CommandSet].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum TableKind {
    Off,
    Fan,
    Heat,
    Cool,
    CoolSilent,
    CoolAuto,
    Dehumidification,
}


/// Inclusive range of whole-degree setpoints a code book was recorded for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemperatureRange {
    min: u8,
    max: u8
}

impl TemperatureRange {
    pub fn new(min: u8, max: u8) -> Result<Self, TableError> {
        if min > max {
            return Err(TableError::Range { min, max });
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Number of setpoints, i.e. the length of every table of the code book.
    pub fn len(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, temperature: f32) -> bool {
        temperature >= self.min as f32 && temperature <= self.max as f32
    }

    /// Index of `temperature` into a table. Always a valid index: the whole-degree part of
    /// the temperature is clamped to the range first.
    pub fn offset(&self, temperature: f32) -> usize {
        let clamped = if temperature.is_nan() {
            self.min
        } else {
            temperature.floor().clamp(self.min as f32, self.max as f32) as u8
        };

        (clamped - self.min) as usize
    }

    pub fn temperature_at(&self, offset: usize) -> u8 {
        self.min + offset as u8
    }
}


/// Waveforms indexed by temperature offset, one per setpoint of the range.
#[derive(Clone, Debug)]
pub struct CommandTable {
    waveforms: Box<[Waveform]>
}

impl CommandTable {
    pub fn new(kind: TableKind, range: TemperatureRange, waveforms: Vec<Waveform>) -> Result<Self, TableError> {
        if waveforms.len() != range.len() {
            return Err(TableError::Length { kind, expected: range.len(), actual: waveforms.len() });
        }

        Ok(Self { waveforms: waveforms.into_boxed_slice() })
    }

    /// Decode a table from its base64 codes.
    pub fn decode<S: AsRef<str>>(kind: TableKind, range: TemperatureRange, codes: &[S]) -> Result<Self, TableError> {
        let waveforms = codes.iter()
            .enumerate()
            .map(|(index, code)| {
                Waveform::from_base64(code.as_ref())
                    .map_err(|source| TableError::Waveform { kind, index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(kind, range, waveforms)
    }

    pub fn get(&self, offset: usize) -> Option<&Waveform> {
        self.waveforms.get(offset)
    }

    pub fn len(&self) -> usize {
        self.waveforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waveforms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waveform> {
        self.waveforms.iter()
    }
}


/// Cool codes: one table on the older units, one table per fan speed on the revised GREE unit.
#[derive(Clone, Debug)]
pub enum CoolTables {
    Single(CommandTable),
    PerFan {
        silent: CommandTable,
        auto: CommandTable
    }
}


/// Every pre-recorded code of one air conditioner model. Built once, never mutated.
#[derive(Clone, Debug)]
pub struct CommandSet {
    name: String,
    range: TemperatureRange,
    off: Waveform,
    fan: Option<Waveform>,
    heat: CommandTable,
    cool: CoolTables,
    dehumidification: Option<CommandTable>,
}

impl CommandSet {
    pub fn new(
        name: impl Into<String>,
        range: TemperatureRange,
        off: Waveform,
        fan: Option<Waveform>,
        heat: CommandTable,
        cool: CoolTables,
        dehumidification: Option<CommandTable>
    ) -> Result<Self, TableError> {
        let tables = [Some((TableKind::Heat, &heat)), dehumidification.as_ref().map(|t| (TableKind::Dehumidification, t))];
        let cool_tables = match &cool {
            CoolTables::Single(table) => vec![(TableKind::Cool, table)],
            CoolTables::PerFan { silent, auto } => vec![(TableKind::CoolSilent, silent), (TableKind::CoolAuto, auto)],
        };

        for (kind, table) in tables.into_iter().flatten().chain(cool_tables) {
            if table.len() != range.len() {
                return Err(TableError::Length { kind, expected: range.len(), actual: table.len() });
            }
        }

        Ok(Self {
            name: name.into(),
            range,
            off,
            fan,
            heat,
            cool,
            dehumidification
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> TemperatureRange {
        self.range
    }

    pub fn off(&self) -> &Waveform {
        &self.off
    }

    pub fn fan(&self) -> Option<&Waveform> {
        self.fan.as_ref()
    }

    pub fn heat(&self) -> &CommandTable {
        &self.heat
    }

    /// The cool table for a fan speed. Single-table units ignore the fan speed.
    pub fn cool(&self, fan_mode: FanMode) -> &CommandTable {
        match (&self.cool, fan_mode) {
            (CoolTables::Single(table), _) => table,
            (CoolTables::PerFan { silent, .. }, FanMode::Silent) => silent,
            (CoolTables::PerFan { auto, .. }, FanMode::Auto) => auto,
        }
    }

    pub fn dehumidification(&self) -> Option<&CommandTable> {
        self.dehumidification.as_ref()
    }

    /// Whether the code book has codes for `mode`.
    pub fn supports(&self, mode: Mode) -> bool {
        match mode {
            Mode::Off | Mode::Idle | Mode::Heat | Mode::Cool | Mode::Auto => true,
            Mode::Fan => self.fan.is_some(),
            Mode::Dehumidification => self.dehumidification.is_some(),
        }
    }

    /// Whether cool codes were recorded per fan speed.
    pub fn has_fan_variants(&self) -> bool {
        matches!(self.cool, CoolTables::PerFan { .. })
    }

    /// Temperature-indexed tables, in display order.
    pub fn tables(&self) -> Vec<(TableKind, &CommandTable)> {
        let mut tables = vec![(TableKind::Heat, &self.heat)];

        match &self.cool {
            CoolTables::Single(table) => tables.push((TableKind::Cool, table)),
            CoolTables::PerFan { silent, auto } => {
                tables.push((TableKind::CoolSilent, silent));
                tables.push((TableKind::CoolAuto, auto));
            }
        }

        if let Some(table) = &self.dehumidification {
            tables.push((TableKind::Dehumidification, table));
        }

        tables
    }
}


#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A small synthetic code book, each waveform a single distinguishable byte pattern.
    pub(crate) fn waveform(tag: u8, index: u8) -> Waveform {
        Waveform::new(vec![0x26, 0x00, 0x02, 0x00, tag, index]).unwrap()
    }

    pub(crate) fn table(kind: TableKind, range: TemperatureRange, tag: u8) -> CommandTable {
        let waveforms = (0..range.len() as u8).map(|i| waveform(tag, i)).collect();
        CommandTable::new(kind, range, waveforms).unwrap()
    }

    pub(crate) fn revised_set() -> CommandSet {
        let range = TemperatureRange::new(16, 30).unwrap();

        CommandSet::new(
            "test",
            range,
            waveform(0xf0, 0),
            Some(waveform(0xfa, 0)),
            table(TableKind::Heat, range, 0x01),
            CoolTables::PerFan {
                silent: table(TableKind::CoolSilent, range, 0x02),
                auto: table(TableKind::CoolAuto, range, 0x03),
            },
            Some(table(TableKind::Dehumidification, range, 0x04)),
        ).unwrap()
    }

    pub(crate) fn legacy_set() -> CommandSet {
        let range = TemperatureRange::new(16, 30).unwrap();

        CommandSet::new(
            "legacy",
            range,
            waveform(0xf0, 0),
            None,
            table(TableKind::Heat, range, 0x01),
            CoolTables::Single(table(TableKind::Cool, range, 0x02)),
            None,
        ).unwrap()
    }

    #[test]
    fn offset_is_clamped() {
        let range = TemperatureRange::new(16, 30).unwrap();

        assert_eq!(range.len(), 15);
        assert_eq!(range.offset(16.0), 0);
        assert_eq!(range.offset(22.0), 6);
        assert_eq!(range.offset(22.9), 6);
        assert_eq!(range.offset(30.0), 14);
        assert_eq!(range.offset(10.0), 0);
        assert_eq!(range.offset(45.0), 14);
        assert_eq!(range.offset(f32::NAN), 0);
        assert_eq!(range.temperature_at(6), 22);
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(TemperatureRange::new(30, 16), Err(TableError::Range { min: 30, max: 16 })));
    }

    #[test]
    fn table_length_must_match_range() {
        let range = TemperatureRange::new(17, 30).unwrap();
        let waveforms = (0..15).map(|i| waveform(0x01, i)).collect();

        let err = CommandTable::new(TableKind::Heat, range, waveforms).unwrap_err();
        assert!(matches!(err, TableError::Length { kind: TableKind::Heat, expected: 14, actual: 15 }));
    }

    #[test]
    fn reports_bad_code_position() {
        let range = TemperatureRange::new(16, 17).unwrap();

        let err = CommandTable::decode(TableKind::CoolAuto, range, &["JgAA", "%%%"]).unwrap_err();
        assert!(matches!(err, TableError::Waveform { kind: TableKind::CoolAuto, index: 1, .. }));
    }

    #[test]
    fn set_rejects_mismatched_tables() {
        let range = TemperatureRange::new(16, 30).unwrap();
        let short = TemperatureRange::new(16, 20).unwrap();

        let err = CommandSet::new(
            "broken",
            range,
            waveform(0xf0, 0),
            None,
            table(TableKind::Heat, range, 0x01),
            CoolTables::Single(table(TableKind::Cool, short, 0x02)),
            None,
        ).unwrap_err();

        assert!(matches!(err, TableError::Length { kind: TableKind::Cool, expected: 15, actual: 5 }));
    }

    #[test]
    fn cool_table_follows_fan_mode() {
        let set = revised_set();
        assert_eq!(set.cool(FanMode::Silent).get(0), Some(&waveform(0x02, 0)));
        assert_eq!(set.cool(FanMode::Auto).get(0), Some(&waveform(0x03, 0)));

        let legacy = legacy_set();
        assert_eq!(legacy.cool(FanMode::Silent).get(3), legacy.cool(FanMode::Auto).get(3));
        assert!(!legacy.supports(Mode::Fan));
        assert!(!legacy.supports(Mode::Dehumidification));
        assert!(set.supports(Mode::Fan));
    }
}
