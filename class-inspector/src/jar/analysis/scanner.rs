use std::{io::Read, path::Path};

use krakatau2::zip::ZipArchive;
use tracing::{debug, info};

use crate::{
    jar::{
        analysis::introspection::summarize_class,
        error::InspectError,
        io::reader::open_jar,
    },
    types::{ClassFailure, InspectionEvent, JarReport, ScanStats, StageProgress},
};

const CLASS_EXT: &str = ".class";

// Progress granularity, about 100 reports for a 30k entry JAR
const PROGRESS_EVERY: usize = 300;

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Only inspect classes whose dotted name starts with this
    pub class_prefix: Option<String>,
}

impl ScanOptions {
    fn wants(&self, entry: &str) -> bool {
        match &self.class_prefix {
            Some(prefix) => entry_class_name(entry).starts_with(prefix.as_str()),
            None => true,
        }
    }
}

pub fn is_class_entry(name: &str, is_dir: bool) -> bool {
    !is_dir && name.ends_with(CLASS_EXT)
}

/// `com/a/B.class` -> `com.a.B`
pub fn entry_class_name(name: &str) -> String {
    name.strip_suffix(CLASS_EXT).unwrap_or(name).replace('/', ".")
}

/// Walk every class entry of the archive in order, reporting each class
/// (or the reason it could not be read) through `on_event`.
///
/// Classes that cannot be read or parsed are reported as failures and the
/// scan goes on. An entry whose headers cannot be located ends the scan
/// with an error.
pub fn scan_jar<R: std::io::Read + std::io::Seek>(
    zip: &mut ZipArchive<R>,
    options: &ScanOptions,
    mut on_event: impl FnMut(InspectionEvent),
) -> Result<ScanStats, InspectError> {
    let mut stats = ScanStats {
        entries: zip.len(),
        ..Default::default()
    };
    on_event(InspectionEvent::Started {
        entries: stats.entries,
    });

    let mut data = Vec::new();
    for idx in 0..zip.len() {
        if idx % PROGRESS_EVERY == 0 {
            let progress = StageProgress::Percentage(idx as f32 / stats.entries as f32);
            debug!("Scanning classes: {}", progress.as_str());
            on_event(InspectionEvent::Progress(progress));
        }

        // Headers only; non-class entries are never decompressed
        let (name, is_dir) = {
            let raw = zip
                .by_index_raw(idx)
                .map_err(|source| InspectError::Entry {
                    entry: format!("#{}", idx),
                    source,
                })?;
            (raw.name().to_owned(), raw.is_dir())
        };

        if !is_class_entry(&name, is_dir) {
            continue;
        }
        if !options.wants(&name) {
            stats.skipped += 1;
            continue;
        }

        data.clear();
        let result = match zip.by_index(idx) {
            Ok(mut file) => file
                .read_to_end(&mut data)
                .map_err(InspectError::from)
                .and_then(|_| summarize_class(&name, &data)),
            Err(source) => Err(InspectError::Entry {
                entry: name.clone(),
                source,
            }),
        };

        match result {
            Ok(summary) => {
                stats.classes += 1;
                on_event(InspectionEvent::Class(summary));
            }
            Err(err) => {
                debug!("Failed to inspect {}: {}", name, err);
                stats.failures += 1;
                on_event(InspectionEvent::Failure(ClassFailure {
                    entry: name,
                    message: err.to_string(),
                }));
            }
        }
    }

    on_event(InspectionEvent::Progress(StageProgress::Done));
    info!(
        "Scanned {} entries: {} classes, {} failures, {} skipped",
        stats.entries, stats.classes, stats.failures, stats.skipped
    );
    on_event(InspectionEvent::Finished(stats));

    Ok(stats)
}

/// Scan a JAR on disk and gather everything into one report
pub fn collect_jar_report(
    path: impl AsRef<Path>,
    options: &ScanOptions,
) -> Result<JarReport, InspectError> {
    let path = path.as_ref();
    let mut zip = open_jar(path)?;

    let mut report = JarReport {
        path: path.display().to_string(),
        ..Default::default()
    };
    scan_jar(&mut zip, options, |event| match event {
        InspectionEvent::Class(summary) => report.classes.push(summary),
        InspectionEvent::Failure(failure) => report.failures.push(failure),
        _ => {}
    })?;

    Ok(report)
}
