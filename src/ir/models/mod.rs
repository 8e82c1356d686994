//! Pre-recorded code books.
//!
//! The built-in models carry their codes in the binary. Other units (such as the revised
//! GREE unit with per-fan cool tables) are described by a TOML code book on disk.

mod gree;
mod midea;
mod zhigao;

use std::{fmt, path::{Path, PathBuf}};

use config::{Config, File};
use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use super::table::{CommandSet, CommandTable, CoolTables, TableError, TableKind, TemperatureRange};
use super::waveform::Waveform;


/// Built-in code books.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, EnumString, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Model {
    #[serde(rename = "gree-yb0fb2")]
    #[strum(to_string = "gree-yb0fb2")]
    GreeYb0fb2,
    Midea,
    Zhigao,
}

impl Model {
    fn codes(self) -> &'static ModelCodes {
        match self {
            Model::GreeYb0fb2 => &gree::CODES,
            Model::Midea => &midea::CODES,
            Model::Zhigao => &zhigao::CODES,
        }
    }

    pub fn code_book(self) -> CodeBook {
        self.codes().into()
    }

    pub fn load(self) -> Result<CommandSet, TableError> {
        self.code_book().build()
    }
}


/// Where a thermostat's code book comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeSource {
    Builtin(Model),
    File(PathBuf),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodeSourceError {
    #[error("either a model or a codes file is required")]
    Missing,
    #[error("a model and a codes file are mutually exclusive")]
    Conflicting,
}

impl CodeSource {
    /// Exactly one of `model` and `codes` must be given.
    pub fn resolve(model: Option<Model>, codes: Option<&Path>) -> Result<Self, CodeSourceError> {
        match (model, codes) {
            (Some(model), None) => Ok(CodeSource::Builtin(model)),
            (None, Some(path)) => Ok(CodeSource::File(path.to_owned())),
            (None, None) => Err(CodeSourceError::Missing),
            (Some(_), Some(_)) => Err(CodeSourceError::Conflicting),
        }
    }

    pub fn load(&self) -> Result<CommandSet, TableError> {
        match self {
            CodeSource::Builtin(model) => model.load(),
            CodeSource::File(path) => CodeBook::load(path)?.build(),
        }
    }
}

impl fmt::Display for CodeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeSource::Builtin(model) => write!(f, "{model}"),
            CodeSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Command line selection of a code book.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct CodeArgs {
    /// Built-in code book (gree-yb0fb2, midea, zhigao)
    #[arg(long)]
    pub model: Option<Model>,

    /// TOML code book
    #[arg(long)]
    pub codes: Option<PathBuf>,
}

impl CodeArgs {
    pub fn source(&self) -> Result<CodeSource, CodeSourceError> {
        CodeSource::resolve(self.model, self.codes.as_deref())
    }
}


/// Compiled-in code book of a legacy (single cool table) model.
pub(crate) struct ModelCodes {
    name: &'static str,
    min_temperature: u8,
    max_temperature: u8,
    off: &'static str,
    heat: &'static [&'static str],
    cool: &'static [&'static str],
}

impl From<&ModelCodes> for CodeBook {
    fn from(codes: &ModelCodes) -> Self {
        fn owned(codes: &[&str]) -> Vec<String> {
            codes.iter().map(|code| code.to_string()).collect()
        }

        CodeBook {
            name: Some(codes.name.to_string()),
            min_temperature: codes.min_temperature,
            max_temperature: codes.max_temperature,
            off: codes.off.to_string(),
            fan: None,
            heat: owned(codes.heat),
            cool: Some(owned(codes.cool)),
            cool_silent: None,
            cool_auto: None,
            dehumidification: None,
        }
    }
}


/// Code book in its transport form: base64 text per waveform.
///
/// ```toml
/// name = "GREE Thermostat"
/// min_temperature = 16
/// max_temperature = 30
/// off = "JgCSAAAB..."
/// fan = "JgCSAAAB..."
/// heat = ["JgCS...", ...]
/// cool_silent = [...]
/// cool_auto = [...]
/// dehumidification = [...]
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct CodeBook {
    pub name: Option<String>,
    pub min_temperature: u8,
    pub max_temperature: u8,
    pub off: String,
    pub fan: Option<String>,
    pub heat: Vec<String>,
    pub cool: Option<Vec<String>>,
    pub cool_silent: Option<Vec<String>>,
    pub cool_auto: Option<Vec<String>>,
    pub dehumidification: Option<Vec<String>>,
}

impl CodeBook {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Config::builder()
            .add_source(File::from(path))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|source| TableError::Read { path: path.to_owned(), source })
    }

    /// Decode and validate every code.
    pub fn build(&self) -> Result<CommandSet, TableError> {
        let range = TemperatureRange::new(self.min_temperature, self.max_temperature)?;

        let single = |kind: TableKind, code: &str| {
            Waveform::from_base64(code).map_err(|source| TableError::Waveform { kind, index: 0, source })
        };

        let off = single(TableKind::Off, &self.off)?;
        let fan = self.fan.as_deref()
            .map(|code| single(TableKind::Fan, code))
            .transpose()?;

        let heat = CommandTable::decode(TableKind::Heat, range, &self.heat)?;

        let cool = match (&self.cool, &self.cool_silent, &self.cool_auto) {
            (Some(_), Some(_), Some(_)) => return Err(TableError::AmbiguousCool),
            (None, Some(silent), Some(auto)) => CoolTables::PerFan {
                silent: CommandTable::decode(TableKind::CoolSilent, range, silent)?,
                auto: CommandTable::decode(TableKind::CoolAuto, range, auto)?,
            },
            (Some(cool), None, None) => CoolTables::Single(CommandTable::decode(TableKind::Cool, range, cool)?),
            _ => return Err(TableError::MissingCool),
        };

        let dehumidification = self.dehumidification.as_ref()
            .map(|codes| CommandTable::decode(TableKind::Dehumidification, range, codes))
            .transpose()?;

        let name = self.name.clone().unwrap_or_else(|| "GREE Thermostat".to_string());

        CommandSet::new(name, range, off, fan, heat, cool, dehumidification)
    }
}


#[cfg(test)]
mod tests {
    use config::FileFormat;
    use strum::IntoEnumIterator;

    use crate::climate::{FanMode, Mode};

    use super::*;

    #[test]
    fn builtin_models_load() {
        for model in Model::iter() {
            let set = model.load().unwrap_or_else(|err| panic!("{model}: {err}"));

            assert_eq!(set.heat().len(), set.range().len());
            assert!(!set.has_fan_variants());
            assert!(!set.supports(Mode::Fan));

            for (_, table) in set.tables() {
                for waveform in table.iter() {
                    waveform.pulses().unwrap();
                }
            }
        }
    }

    #[test]
    fn builtin_ranges() {
        let gree = Model::GreeYb0fb2.load().unwrap();
        assert_eq!((gree.range().min(), gree.range().max()), (16, 30));
        assert_eq!(gree.heat().len(), 15);

        let midea = Model::Midea.load().unwrap();
        assert_eq!((midea.range().min(), midea.range().max()), (17, 30));
        assert_eq!(midea.cool(FanMode::Auto).len(), 14);

        let zhigao = Model::Zhigao.load().unwrap();
        assert_eq!(zhigao.range().len(), 15);
    }

    #[test]
    fn model_names() {
        assert_eq!("gree-yb0fb2".parse::<Model>().unwrap(), Model::GreeYb0fb2);
        assert_eq!("midea".parse::<Model>().unwrap(), Model::Midea);
        assert_eq!(Model::Zhigao.to_string(), "zhigao");
    }

    #[test]
    fn code_sources() {
        let builtin = CodeSource::Builtin(Model::Midea);
        assert_eq!(builtin.to_string(), "midea");
        assert_eq!(builtin.load().unwrap().range().min(), 17);

        let missing = CodeSource::File(PathBuf::from("does/not/exist.toml"));
        assert!(matches!(missing.load(), Err(TableError::Read { .. })));
    }

    #[test]
    fn resolves_exactly_one_source() {
        let path = Path::new("codes.toml");

        assert_eq!(CodeSource::resolve(Some(Model::Zhigao), None), Ok(CodeSource::Builtin(Model::Zhigao)));
        assert_eq!(CodeSource::resolve(None, Some(path)), Ok(CodeSource::File(path.to_owned())));
        assert_eq!(CodeSource::resolve(None, None), Err(CodeSourceError::Missing));
        assert_eq!(CodeSource::resolve(Some(Model::Midea), Some(path)), Err(CodeSourceError::Conflicting));

        let args = CodeArgs { model: None, codes: Some(path.to_owned()) };
        assert_eq!(args.source(), Ok(CodeSource::File(path.to_owned())));
    }

    const REVISED: &str = r#"
        min_temperature = 16
        max_temperature = 17
        off = "JgAGAAABAA0FAA=="
        fan = "JgACAAEC"
        heat = ["JgACAAEB", "JgACAAEC"]
        cool_silent = ["JgACAAID", "JgACAAIE"]
        cool_auto = ["JgACAAMF", "JgACAAMG"]
        dehumidification = ["JgACAAQH", "JgACAAQI"]
    "#;

    fn parse(text: &str) -> CodeBook {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn toml_code_book_with_fan_variants() {
        let set = parse(REVISED).build().unwrap();

        assert!(set.has_fan_variants());
        assert!(set.supports(Mode::Fan));
        assert!(set.supports(Mode::Dehumidification));
        assert_eq!(set.name(), "GREE Thermostat");
        assert_ne!(set.cool(FanMode::Silent).get(0), set.cool(FanMode::Auto).get(0));
    }

    #[test]
    fn incomplete_fan_variants_are_rejected() {
        let text = REVISED.replace(r#"cool_auto = ["JgACAAMF", "JgACAAMG"]"#, "");
        assert!(matches!(parse(&text).build(), Err(TableError::MissingCool)));
    }

    #[test]
    fn cool_table_with_fan_variants_is_rejected() {
        let text = format!("{REVISED}\ncool = [\"JgACAAUJ\", \"JgACAAUK\"]\n");
        assert!(matches!(parse(&text).build(), Err(TableError::AmbiguousCool)));
    }

    #[test]
    fn wrong_table_length_is_rejected() {
        let text = REVISED.replace(r#"heat = ["JgACAAEB", "JgACAAEC"]"#, r#"heat = ["JgACAAEB"]"#);
        assert!(matches!(
            parse(&text).build(),
            Err(TableError::Length { kind: TableKind::Heat, expected: 2, actual: 1 })
        ));
    }
}
