use std::{fs::File, io::Read, path::Path};

use krakatau2::zip::ZipArchive;
use tracing::debug;

use crate::jar::{analysis::scanner::entry_class_name, error::InspectError};

/// Open a JAR archive, refusing anything that is not a regular file
pub fn open_jar(path: impl AsRef<Path>) -> Result<ZipArchive<File>, InspectError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(InspectError::NotAFile(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let zip = ZipArchive::new(file).map_err(|source| InspectError::Archive {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened {} with {} entries", path.display(), zip.len());

    Ok(zip)
}

/// Read a single class by entry path (`a/b/C.class`) or dotted name (`a.b.C`)
pub fn read_class_bytes<R: std::io::Read + std::io::Seek>(
    zip: &mut ZipArchive<R>,
    class: &str,
) -> Result<(String, Vec<u8>), InspectError> {
    let wanted = class.strip_suffix(".class").unwrap_or(class).replace('/', ".");

    let entry = zip
        .file_names()
        .find(|name| name.ends_with(".class") && entry_class_name(name) == wanted)
        .map(ToOwned::to_owned)
        .ok_or_else(|| InspectError::ClassNotFound(class.to_string()))?;

    let mut file = zip.by_name(&entry).map_err(|source| InspectError::Entry {
        entry: entry.clone(),
        source,
    })?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    Ok((entry, buffer))
}
