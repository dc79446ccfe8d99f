/*!
 * OpenDocument Text package (zip container) I/O.
 *
 * The `mimetype` entry is always written first and uncompressed so that
 * office suites can sniff the format; every other entry is deflated.
 */

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::document::tree::Element;
use crate::document::xml::XmlDocument;
use crate::errors::DocumentError;

/// Media type of OpenDocument Text
pub const ODT_MIMETYPE: &str = "application/vnd.oasis.opendocument.text";

pub const MIMETYPE_PART: &str = "mimetype";
pub const CONTENT_PART: &str = "content.xml";
pub const STYLES_PART: &str = "styles.xml";
pub const META_PART: &str = "meta.xml";
pub const MANIFEST_PART: &str = "META-INF/manifest.xml";

/// An ODT package held in memory as ordered (name, bytes) entries.
#[derive(Debug, Clone, Default)]
pub struct OdtPackage {
    entries: Vec<(String, Vec<u8>)>,
}

impl OdtPackage {
    /// Assemble a new package from its XML parts.
    pub fn from_parts(content: &XmlDocument, styles: &XmlDocument, meta: &XmlDocument) -> Self {
        let mut package = Self::default();
        package.set_entry(MIMETYPE_PART, ODT_MIMETYPE.as_bytes().to_vec());
        package.set_entry(CONTENT_PART, content.to_xml_string().into_bytes());
        package.set_entry(STYLES_PART, styles.to_xml_string().into_bytes());
        package.set_entry(META_PART, meta.to_xml_string().into_bytes());
        package.set_entry(MANIFEST_PART, manifest().to_xml_string().into_bytes());
        package
    }

    /// Read every entry of an existing package, preserving order.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        debug!("Opening document package {:?}", path);
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;

        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let name = entry.name().to_string();
            let mut data = Vec::new();
            entry.read_to_end(&mut data)?;
            entries.push((name, data));
        }

        Ok(Self { entries })
    }

    /// Names of all entries in package order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Raw bytes of an entry.
    pub fn entry(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, data)| data.as_slice())
    }

    /// Replace or append an entry.
    pub fn set_entry(&mut self, name: &str, data: Vec<u8>) {
        match self.entries.iter_mut().find(|(entry, _)| entry == name) {
            Some((_, existing)) => *existing = data,
            None => self.entries.push((name.to_string(), data)),
        }
    }

    /// Parse an XML part.
    pub fn xml_part(&self, name: &str) -> Result<XmlDocument, DocumentError> {
        let data = self
            .entry(name)
            .ok_or_else(|| DocumentError::MissingPart(name.to_string()))?;
        let text = std::str::from_utf8(data).map_err(|_| DocumentError::Encoding(name.to_string()))?;
        XmlDocument::parse(text)
    }

    /// Parse `content.xml`.
    pub fn content(&self) -> Result<XmlDocument, DocumentError> {
        self.xml_part(CONTENT_PART)
    }

    /// Replace `content.xml`.
    pub fn set_content(&mut self, content: &XmlDocument) {
        self.set_entry(CONTENT_PART, content.to_xml_string().into_bytes());
    }

    /// Write the package to `path`.
    ///
    /// The archive is built in a temporary file next to the target and moved
    /// into place once complete.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        self.write_to(temp.as_file_mut())?;
        temp.persist(path).map_err(|e| DocumentError::Io(e.error))?;

        debug!("Wrote document package {:?}", path);
        Ok(())
    }

    fn write_to(&self, file: &mut File) -> Result<(), DocumentError> {
        let mut zip = ZipWriter::new(file);
        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mimetype = self
            .entry(MIMETYPE_PART)
            .map(<[u8]>::to_vec)
            .unwrap_or_else(|| ODT_MIMETYPE.as_bytes().to_vec());
        zip.start_file(MIMETYPE_PART, stored)?;
        zip.write_all(&mimetype)?;

        for (name, data) in self.entries.iter().filter(|(name, _)| name != MIMETYPE_PART) {
            zip.start_file(name.as_str(), deflated)?;
            zip.write_all(data)?;
        }

        zip.finish()?;
        Ok(())
    }
}

fn manifest() -> XmlDocument {
    let entry = |path: &str, media_type: &str| {
        Element::new("manifest:file-entry")
            .with_attribute("manifest:full-path", path)
            .with_attribute("manifest:media-type", media_type)
    };

    let root = Element::new("manifest:manifest")
        .with_attribute("xmlns:manifest", "urn:oasis:names:tc:opendocument:xmlns:manifest:1.0")
        .with_attribute("manifest:version", "1.2")
        .with_child(entry("/", ODT_MIMETYPE).with_attribute("manifest:version", "1.2"))
        .with_child(entry(CONTENT_PART, "text/xml"))
        .with_child(entry(STYLES_PART, "text/xml"))
        .with_child(entry(META_PART, "text/xml"));

    XmlDocument::new(root)
}
