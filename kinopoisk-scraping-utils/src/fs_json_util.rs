use std::{
    fmt::Debug,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use fs_err::File;
use serde::{Deserialize, Serialize};

pub fn read_json<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    (|| serde_json::from_reader(BufReader::new(File::open(&path)?)).map_err(anyhow::Error::new))()
        .with_context(|| {
            format!(
                "While trying to parse {path:?} as {}",
                std::any::type_name::<T>()
            )
        })
}

/// Like [`read_json`], but a missing file yields `T::default()` instead of an error.
pub fn read_json_or_default<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de> + Default>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    match File::open(&path) {
        Ok(file) => serde_json::from_reader(BufReader::new(file)).with_context(|| {
            format!(
                "While trying to parse {path:?} as {}",
                std::any::type_name::<T>()
            )
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(e).with_context(|| format!("While trying to read {path:?}")),
    }
}

/// Writes `value` pretty-printed, each nesting level indented by `indent`.
pub fn write_json_indented<P: Into<PathBuf>, T: Serialize>(
    path: P,
    value: &T,
    indent: &[u8],
) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}
