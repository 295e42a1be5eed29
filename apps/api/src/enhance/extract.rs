//! Resume text extraction for uploaded .pdf, .docx and .txt files.

use std::io::{Cursor, Read};

use regex::Regex;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
    Txt,
}

impl ResumeFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(ResumeFormat::Pdf),
            "docx" => Some(ResumeFormat::Docx),
            "txt" => Some(ResumeFormat::Txt),
            _ => None,
        }
    }
}

pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    let format = ResumeFormat::from_filename(filename)
        .ok_or_else(|| AppError::UnsupportedFile(filename.to_string()))?;

    match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Extraction(format!("Error processing PDF file: {e}"))),
        ResumeFormat::Docx => extract_docx(bytes),
        ResumeFormat::Txt => String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::Extraction(format!("Error processing TXT file: {e}"))),
    }
}

/// Reads `word/document.xml` out of the archive and collects its text runs.
/// Paragraph ends and explicit breaks become newlines.
fn extract_docx(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(docx_error)?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(docx_error)?
        .read_to_string(&mut xml)
        .map_err(docx_error)?;

    let token = Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:br\s*/>|<w:tab\s*/>")
        .map_err(|e| AppError::Internal(e.into()))?;

    let mut text = String::with_capacity(xml.len() / 4);
    for caps in token.captures_iter(&xml) {
        match caps.get(1) {
            Some(run) => text.push_str(&unescape_xml(run.as_str())),
            None if caps[0].starts_with("<w:tab") => text.push('\t'),
            None => text.push('\n'),
        }
    }
    Ok(text.trim_end().to_string())
}

fn docx_error(e: impl std::fmt::Display) -> AppError {
    AppError::Extraction(format!("Error processing DOCX file: {e}"))
}

fn unescape_xml(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
