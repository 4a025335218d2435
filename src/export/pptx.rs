//! PPTX rendering: assembles the OOXML package part by part.

use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};

use super::{EmbeddedImage, ExportError, Palette, Theme};
use crate::models::{Presentation, Slide};

// 16:9 deck, 13.33in x 7.5in in EMU.
const SLIDE_CX: i64 = 12_192_000;
const SLIDE_CY: i64 = 6_858_000;

/// ZIP package assembler. Every entry is written with the same fixed
/// timestamp so identical parts produce identical archives.
struct PackageWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl PackageWriter {
    fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn add_part(&mut self, path: &str, content: &[u8]) -> Result<(), ExportError> {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        self.zip.start_file(path, options)?;
        self.zip.write_all(content)?;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        Ok(self.zip.finish()?.into_inner())
    }
}

/// Render a presentation as a PPTX package. `images` runs parallel to the
/// slides; a `Some` entry is embedded on that slide.
pub fn render(
    presentation: &Presentation,
    theme: Theme,
    images: &[Option<EmbeddedImage>],
) -> Result<Vec<u8>, ExportError> {
    let palette = theme.palette();
    let slide_count = presentation.slides.len();
    let mut pkg = PackageWriter::new();

    pkg.add_part(
        "[Content_Types].xml",
        content_types_xml(slide_count).as_bytes(),
    )?;
    pkg.add_part("_rels/.rels", ROOT_RELS.as_bytes())?;
    pkg.add_part(
        "ppt/presentation.xml",
        presentation_xml(slide_count).as_bytes(),
    )?;
    pkg.add_part(
        "ppt/_rels/presentation.xml.rels",
        presentation_rels_xml(slide_count).as_bytes(),
    )?;
    pkg.add_part("ppt/theme/theme1.xml", theme_xml(&palette).as_bytes())?;
    pkg.add_part(
        "ppt/slideMasters/slideMaster1.xml",
        slide_master_xml(&palette).as_bytes(),
    )?;
    pkg.add_part(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        SLIDE_MASTER_RELS.as_bytes(),
    )?;
    pkg.add_part(
        "ppt/slideLayouts/slideLayout1.xml",
        SLIDE_LAYOUT.as_bytes(),
    )?;
    pkg.add_part(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        SLIDE_LAYOUT_RELS.as_bytes(),
    )?;

    for (i, slide) in presentation.slides.iter().enumerate() {
        let n = i + 1;
        let image = images.get(i).and_then(|opt| opt.as_ref());
        pkg.add_part(
            &format!("ppt/slides/slide{n}.xml"),
            slide_xml(i, slide, &presentation.topic, &palette, image.is_some()).as_bytes(),
        )?;
        pkg.add_part(
            &format!("ppt/slides/_rels/slide{n}.xml.rels"),
            slide_rels_xml(n, image.map(|img| img.kind.extension())).as_bytes(),
        )?;
        if let Some(image) = image {
            pkg.add_part(
                &format!("ppt/media/image{n}.{}", image.kind.extension()),
                &image.data,
            )?;
        }
    }

    pkg.finish()
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn content_types_xml(slide_count: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Default Extension="png" ContentType="image/png"/>
<Default Extension="jpeg" ContentType="image/jpeg"/>
<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
"#,
    );
    for n in 1..=slide_count {
        xml.push_str(&format!(
            "<Override PartName=\"/ppt/slides/slide{n}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n"
        ));
    }
    xml.push_str("</Types>\n");
    xml
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
</Relationships>
"#;

fn presentation_xml(slide_count: usize) -> String {
    let mut sld_ids = String::new();
    for n in 1..=slide_count {
        let id = 255 + n;
        let r_id = n + 1;
        sld_ids.push_str(&format!("<p:sldId id=\"{id}\" r:id=\"rId{r_id}\"/>"));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
<p:sldIdLst>{sld_ids}</p:sldIdLst>
<p:sldSz cx="{SLIDE_CX}" cy="{SLIDE_CY}"/>
<p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>
"#
    )
}

fn presentation_rels_xml(slide_count: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>
"#,
    );
    for n in 1..=slide_count {
        let r_id = n + 1;
        xml.push_str(&format!(
            "<Relationship Id=\"rId{r_id}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"slides/slide{n}.xml\"/>\n"
        ));
    }
    xml.push_str("</Relationships>\n");
    xml
}

/// Theme part. The format scheme blocks are boilerplate the format
/// requires; the color scheme is where the palette lands.
fn theme_xml(palette: &Palette) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Deck">
<a:themeElements>
<a:clrScheme name="Deck">
<a:dk1><a:srgbClr val="{title}"/></a:dk1>
<a:lt1><a:srgbClr val="{background}"/></a:lt1>
<a:dk2><a:srgbClr val="{body}"/></a:dk2>
<a:lt2><a:srgbClr val="{background}"/></a:lt2>
<a:accent1><a:srgbClr val="{accent}"/></a:accent1>
<a:accent2><a:srgbClr val="{accent}"/></a:accent2>
<a:accent3><a:srgbClr val="{accent}"/></a:accent3>
<a:accent4><a:srgbClr val="{accent}"/></a:accent4>
<a:accent5><a:srgbClr val="{accent}"/></a:accent5>
<a:accent6><a:srgbClr val="{accent}"/></a:accent6>
<a:hlink><a:srgbClr val="{accent}"/></a:hlink>
<a:folHlink><a:srgbClr val="{accent}"/></a:folHlink>
</a:clrScheme>
<a:fontScheme name="Deck">
<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
</a:fontScheme>
<a:fmtScheme name="Deck">
<a:fillStyleLst>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
</a:fillStyleLst>
<a:lnStyleLst>
<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
</a:lnStyleLst>
<a:effectStyleLst>
<a:effectStyle><a:effectLst/></a:effectStyle>
<a:effectStyle><a:effectLst/></a:effectStyle>
<a:effectStyle><a:effectLst/></a:effectStyle>
</a:effectStyleLst>
<a:bgFillStyleLst>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
</a:bgFillStyleLst>
</a:fmtScheme>
</a:themeElements>
</a:theme>
"#,
        title = palette.title,
        background = palette.background,
        body = palette.body,
        accent = palette.accent,
    )
}

fn slide_master_xml(palette: &Palette) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld>
<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{background}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>
</p:spTree>
</p:cSld>
<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>
</p:sldMaster>
"#,
        background = palette.background,
    )
}

const SLIDE_MASTER_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>
</Relationships>
"#;

const SLIDE_LAYOUT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld>
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>
</p:spTree>
</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>
"#;

const SLIDE_LAYOUT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>
"#;

/// Every slide relates to the shared layout as rId1; the slide's image,
/// when it has one, is rId2.
fn slide_rels_xml(n: usize, image_ext: Option<&str>) -> String {
    let image_rel = match image_ext {
        Some(ext) => format!(
            "\n<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" Target=\"../media/image{n}.{ext}\"/>"
        ),
        None => String::new(),
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>{image_rel}
</Relationships>
"#
    )
}

fn slide_xml(
    index: usize,
    slide: &Slide,
    topic: &str,
    palette: &Palette,
    has_image: bool,
) -> String {
    let shapes = if index == 0 {
        title_shapes(slide, topic, palette)
    } else {
        content_shapes(slide, palette, has_image)
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld>
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>
{shapes}</p:spTree>
</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>
"#
    )
}

/// Lead slide: centered title with the deck subtitle underneath.
fn title_shapes(slide: &Slide, topic: &str, palette: &Palette) -> String {
    let title = escape_xml(&slide.title);
    let topic = escape_xml(topic);
    format!(
        r#"<p:sp>
<p:nvSpPr><p:cNvPr id="2" name="Title"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
<p:spPr><a:xfrm><a:off x="914400" y="2057400"/><a:ext cx="10363200" cy="1371600"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
<p:txBody><a:bodyPr wrap="square"/><a:lstStyle/>
<a:p><a:pPr algn="ctr"/><a:r><a:rPr lang="en-US" sz="5400" b="1"><a:solidFill><a:srgbClr val="{title_color}"/></a:solidFill></a:rPr><a:t>{title}</a:t></a:r></a:p>
</p:txBody>
</p:sp>
<p:sp>
<p:nvSpPr><p:cNvPr id="3" name="Subtitle"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
<p:spPr><a:xfrm><a:off x="914400" y="3657600"/><a:ext cx="10363200" cy="1143000"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
<p:txBody><a:bodyPr wrap="square"/><a:lstStyle/>
<a:p><a:pPr algn="ctr"/><a:r><a:rPr lang="en-US" sz="2000"><a:solidFill><a:srgbClr val="{body_color}"/></a:solidFill></a:rPr><a:t>AI Generated Presentation</a:t></a:r></a:p>
<a:p><a:pPr algn="ctr"/><a:r><a:rPr lang="en-US" sz="2000"><a:solidFill><a:srgbClr val="{body_color}"/></a:solidFill></a:rPr><a:t>{topic}</a:t></a:r></a:p>
</p:txBody>
</p:sp>
"#,
        title_color = palette.title,
        body_color = palette.body,
    )
}

/// Body slide: heading plus bulleted text, with the text column narrowed
/// when an image sits on the right half.
fn content_shapes(slide: &Slide, palette: &Palette, has_image: bool) -> String {
    let title = escape_xml(&slide.title);
    let body_cx = if has_image { 5_181_600 } else { 10_820_400 };

    let mut paragraphs = String::new();
    for bullet in &slide.bullets {
        paragraphs.push_str(&format!(
            "<a:p><a:pPr marL=\"285750\" indent=\"-285750\"><a:buChar char=\"\u{2022}\"/></a:pPr><a:r><a:rPr lang=\"en-US\" sz=\"1800\"><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill></a:rPr><a:t>{}</a:t></a:r></a:p>\n",
            palette.body,
            escape_xml(bullet),
        ));
    }

    let mut shapes = format!(
        r#"<p:sp>
<p:nvSpPr><p:cNvPr id="2" name="Title"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
<p:spPr><a:xfrm><a:off x="685800" y="365760"/><a:ext cx="10820400" cy="1097280"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
<p:txBody><a:bodyPr wrap="square"/><a:lstStyle/>
<a:p><a:r><a:rPr lang="en-US" sz="4400" b="1"><a:solidFill><a:srgbClr val="{title_color}"/></a:solidFill></a:rPr><a:t>{title}</a:t></a:r></a:p>
</p:txBody>
</p:sp>
"#,
        title_color = palette.title,
    );

    if !slide.bullets.is_empty() {
        shapes.push_str(&format!(
            r#"<p:sp>
<p:nvSpPr><p:cNvPr id="3" name="Body"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
<p:spPr><a:xfrm><a:off x="685800" y="1737360"/><a:ext cx="{body_cx}" cy="4343400"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
<p:txBody><a:bodyPr wrap="square"/><a:lstStyle/>
{paragraphs}</p:txBody>
</p:sp>
"#,
        ));
    }

    if has_image {
        shapes.push_str(
            r#"<p:pic>
<p:nvPicPr><p:cNvPr id="4" name="Image"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr>
<p:blipFill><a:blip r:embed="rId2"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>
<p:spPr><a:xfrm><a:off x="6172200" y="1737360"/><a:ext cx="5334000" cy="4114800"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
</p:pic>
"#,
        );
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::images::ImageKind;
    use crate::models::Presentation;
    use bytes::Bytes;
    use std::io::Read;

    fn sample() -> Presentation {
        Presentation::new(
            "Rust & Friends",
            vec![
                Slide {
                    title: "Rust & Friends".into(),
                    bullets: vec![],
                    notes: None,
                    image_ref: None,
                },
                Slide {
                    title: "Why <Rust>".into(),
                    bullets: vec!["Safety".into(), "Speed".into()],
                    notes: Some("say it slowly".into()),
                    image_ref: None,
                },
            ],
        )
    }

    fn part_names(bytes: &[u8]) -> Vec<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn package_contains_one_part_per_slide() {
        let p = sample();
        let bytes = render(&p, Theme::Midnight, &[None, None]).unwrap();
        let names = part_names(&bytes);
        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"ppt/presentation.xml".to_string()));
        assert!(names.contains(&"ppt/slides/slide1.xml".to_string()));
        assert!(names.contains(&"ppt/slides/slide2.xml".to_string()));
        assert!(!names.contains(&"ppt/slides/slide3.xml".to_string()));
    }

    #[test]
    fn identical_input_renders_identical_bytes() {
        let p = sample();
        let a = render(&p, Theme::Midnight, &[None, None]).unwrap();
        let b = render(&p, Theme::Midnight, &[None, None]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn themes_change_the_palette_bytes() {
        let p = sample();
        let a = render(&p, Theme::Midnight, &[None, None]).unwrap();
        let b = render(&p, Theme::Daylight, &[None, None]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn titles_are_xml_escaped() {
        let xml = slide_xml(
            1,
            &Slide {
                title: "Fish & <Chips>".into(),
                bullets: vec!["a \"quote\"".into()],
                notes: None,
                image_ref: None,
            },
            "t",
            &Theme::Midnight.palette(),
            false,
        );
        assert!(xml.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(xml.contains("a &quot;quote&quot;"));
        assert!(!xml.contains("Fish & <Chips>"));
    }

    #[test]
    fn embedded_image_lands_in_media_with_rels() {
        let p = sample();
        let png = Bytes::from_static(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2]);
        let images = vec![
            None,
            Some(EmbeddedImage {
                kind: ImageKind::Png,
                data: png,
            }),
        ];
        let bytes = render(&p, Theme::Midnight, &images).unwrap();
        let names = part_names(&bytes);
        assert!(names.contains(&"ppt/media/image2.png".to_string()));
        assert!(!names.contains(&"ppt/media/image1.png".to_string()));

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut rels = String::new();
        archive
            .by_name("ppt/slides/_rels/slide2.xml.rels")
            .unwrap()
            .read_to_string(&mut rels)
            .unwrap();
        assert!(rels.contains("../media/image2.png"));
        assert!(rels.contains("../slideLayouts/slideLayout1.xml"));
    }

    #[test]
    fn every_slide_relates_to_the_layout() {
        let p = sample();
        let bytes = render(&p, Theme::Midnight, &[None, None]).unwrap();
        let names = part_names(&bytes);
        assert!(names.contains(&"ppt/slides/_rels/slide1.xml.rels".to_string()));
        assert!(names.contains(&"ppt/slides/_rels/slide2.xml.rels".to_string()));
    }
}
