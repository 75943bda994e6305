use std::io::Read;
use std::path::Path;

use crate::error::Error;

const CT_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const MAIN_DOCUMENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

/// Checks that `path` is a structurally sound DOCX package: a ZIP archive
/// whose content types declare a WordprocessingML main part and whose
/// document part carries a `w:body`. Document content is not interpreted.
pub fn verify(path: &Path) -> Result<(), Error> {
    let file = std::fs::File::open(path)?;
    let mut zip = zip::ZipArchive::new(file)
        .map_err(|e| Error::InvalidDocx(format!("not a ZIP package: {e}")))?;

    let mut xml_content = String::new();
    zip.by_name("[Content_Types].xml")
        .map_err(|_| Error::InvalidDocx("missing [Content_Types].xml".into()))?
        .read_to_string(&mut xml_content)?;
    let xml = roxmltree::Document::parse(&xml_content)?;
    let declares_document = xml.descendants().any(|n| {
        n.tag_name().name() == "Override"
            && n.tag_name().namespace() == Some(CT_NS)
            && n.attribute("ContentType") == Some(MAIN_DOCUMENT_TYPE)
    });
    if !declares_document {
        return Err(Error::InvalidDocx(
            "content types do not declare a main document part".into(),
        ));
    }

    xml_content.clear();
    zip.by_name("word/document.xml")
        .map_err(|_| Error::InvalidDocx("missing word/document.xml".into()))?
        .read_to_string(&mut xml_content)?;
    let xml = roxmltree::Document::parse(&xml_content)?;
    let has_body = xml
        .root_element()
        .children()
        .any(|n| n.tag_name().name() == "body" && n.tag_name().namespace() == Some(WML_NS));
    if !has_body {
        return Err(Error::InvalidDocx("missing w:body".into()));
    }

    Ok(())
}
