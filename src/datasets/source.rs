use std::path::Path;

use image::ImageFormat;

use super::errors::SplitError;

/// Whether `name` carries one of the accepted image extensions
/// (`jpg`, `jpeg`, `png`, any case).
pub fn is_accepted_image<P: AsRef<Path>>(name: P) -> bool {
    name.as_ref()
        .extension()
        .and_then(ImageFormat::from_extension)
        .map_or(false, |fmt| ACCEPTED_FORMATS.contains(&fmt))
}

/// Lists the accepted image files directly inside `dir`, sorted by name.
///
/// Sub-directories and files with other extensions are ignored.
pub fn enumerate_items<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, SplitError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(SplitError::NotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut items = Vec::new();
    let mut ignored = 0usize;
    for entry in std::fs::read_dir(dir).map_err(|e| SplitError::io("read directory", dir, e))? {
        let entry = entry.map_err(|e| SplitError::io("read directory", dir, e))?;
        let path = entry.path();
        if !path.is_file() || !is_accepted_image(&path) {
            ignored += 1;
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => items.push(name),
            Err(name) => {
                tracing::warn!("skipping non UTF-8 file name {:?}", name);
                ignored += 1;
            }
        }
    }
    items.sort_unstable();

    tracing::debug!(
        "found {} images in {} ({} entries ignored)",
        items.len(),
        dir.display(),
        ignored
    );
    Ok(items)
}

/// Name of the sidecar paired with `item`: same stem, extension `ext`.
pub fn sidecar_name(item: &str, ext: &str) -> String {
    let stem = Path::new(item)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(item);
    format!("{stem}.{}", ext.trim_start_matches('.'))
}

const ACCEPTED_FORMATS: [ImageFormat; 2] = [ImageFormat::Jpeg, ImageFormat::Png];
