pub mod models;
pub mod table;
pub mod waveform;

pub use models::{CodeArgs, CodeBook, CodeSource, CodeSourceError, Model};
pub use table::{CommandSet, CommandTable, CoolTables, TableError, TableKind, TemperatureRange};
pub use waveform::{Waveform, WaveformError};
