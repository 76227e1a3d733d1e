use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::RenderError;
use super::layout::{DeckPlan, HAlign, Rule, SlidePlan, TextBox, VAlign};
use super::xml::{
    EMU_PER_POINT, NS_A, NS_P, NS_R, SLIDE_CX, SLIDE_CY, XML_DECL, emu, escape, hex_color,
    relationships,
};
use crate::models::presentation::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR,
};

const SLIDE_ID_BASE: usize = 256;
const MASTER_ID: u64 = 2_147_483_648;
const LAYOUT_ID: u64 = 2_147_483_649;

/// Write `plan` as a `.pptx` file at `path`.
pub fn write_pptx(plan: &DeckPlan, path: &Path) -> Result<(), RenderError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pptx_to(plan, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `plan` as a `.pptx` package into any seekable sink.
pub fn write_pptx_to<W: Write + Seek>(plan: &DeckPlan, sink: W) -> Result<(), RenderError> {
    let mut zip = ZipWriter::new(sink);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let with_notes: Vec<usize> = plan
        .slides
        .iter()
        .enumerate()
        .filter(|(_, s)| s.notes.is_some())
        .map(|(i, _)| i + 1)
        .collect();

    let mut put = |name: &str, body: String| -> Result<(), RenderError> {
        zip.start_file(name, options)?;
        zip.write_all(body.as_bytes())?;
        Ok(())
    };

    put("[Content_Types].xml", content_types(plan.slides.len(), &with_notes))?;
    put("_rels/.rels", root_rels())?;
    put("docProps/core.xml", core_props(plan))?;
    put("docProps/app.xml", app_props(plan.slides.len(), with_notes.len()))?;

    put("ppt/presentation.xml", presentation(plan.slides.len()))?;
    put("ppt/_rels/presentation.xml.rels", presentation_rels(plan.slides.len()))?;
    put("ppt/presProps.xml", pres_props())?;
    put("ppt/viewProps.xml", view_props())?;
    put("ppt/tableStyles.xml", table_styles())?;

    put("ppt/theme/theme1.xml", theme(plan, "Slide Theme"))?;
    put("ppt/theme/theme2.xml", theme(plan, "Notes Theme"))?;
    put("ppt/slideMasters/slideMaster1.xml", slide_master(plan))?;
    put(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        relationships(&[
            ("rId1".into(), "slideLayout", "../slideLayouts/slideLayout1.xml".into()),
            ("rId2".into(), "theme", "../theme/theme1.xml".into()),
        ]),
    )?;
    put("ppt/slideLayouts/slideLayout1.xml", slide_layout())?;
    put(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        relationships(&[(
            "rId1".into(),
            "slideMaster",
            "../slideMasters/slideMaster1.xml".into(),
        )]),
    )?;
    put("ppt/notesMasters/notesMaster1.xml", notes_master())?;
    put(
        "ppt/notesMasters/_rels/notesMaster1.xml.rels",
        relationships(&[("rId1".into(), "theme", "../theme/theme2.xml".into())]),
    )?;

    for (index, slide) in plan.slides.iter().enumerate() {
        let n = index + 1;
        put(&format!("ppt/slides/slide{n}.xml"), slide_xml(slide))?;

        let mut rels = vec![(
            "rId1".to_string(),
            "slideLayout",
            "../slideLayouts/slideLayout1.xml".to_string(),
        )];
        if let Some(notes) = &slide.notes {
            rels.push((
                "rId2".to_string(),
                "notesSlide",
                format!("../notesSlides/notesSlide{n}.xml"),
            ));
            put(&format!("ppt/notesSlides/notesSlide{n}.xml"), notes_slide(notes))?;
            put(
                &format!("ppt/notesSlides/_rels/notesSlide{n}.xml.rels"),
                relationships(&[
                    ("rId1".into(), "notesMaster", "../notesMasters/notesMaster1.xml".into()),
                    ("rId2".into(), "slide", format!("../slides/slide{n}.xml")),
                ]),
            )?;
        }
        put(&format!("ppt/slides/_rels/slide{n}.xml.rels"), relationships(&rels))?;
    }

    zip.finish()?;
    Ok(())
}

fn content_types(slide_count: usize, with_notes: &[usize]) -> String {
    let ct = "application/vnd.openxmlformats-officedocument";
    let mut out = String::from(XML_DECL);
    out.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    out.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    out.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

    let mut over = |part: &str, kind: &str| {
        out.push_str(&format!(r#"<Override PartName="{part}" ContentType="{kind}"/>"#));
    };
    over("/ppt/presentation.xml", &format!("{ct}.presentationml.presentation.main+xml"));
    over("/ppt/presProps.xml", &format!("{ct}.presentationml.presProps+xml"));
    over("/ppt/viewProps.xml", &format!("{ct}.presentationml.viewProps+xml"));
    over("/ppt/tableStyles.xml", &format!("{ct}.presentationml.tableStyles+xml"));
    over("/ppt/theme/theme1.xml", &format!("{ct}.theme+xml"));
    over("/ppt/theme/theme2.xml", &format!("{ct}.theme+xml"));
    over("/ppt/slideMasters/slideMaster1.xml", &format!("{ct}.presentationml.slideMaster+xml"));
    over("/ppt/slideLayouts/slideLayout1.xml", &format!("{ct}.presentationml.slideLayout+xml"));
    over("/ppt/notesMasters/notesMaster1.xml", &format!("{ct}.presentationml.notesMaster+xml"));
    for n in 1..=slide_count {
        over(&format!("/ppt/slides/slide{n}.xml"), &format!("{ct}.presentationml.slide+xml"));
    }
    for n in with_notes {
        over(
            &format!("/ppt/notesSlides/notesSlide{n}.xml"),
            &format!("{ct}.presentationml.notesSlide+xml"),
        );
    }
    over("/docProps/core.xml", "application/vnd.openxmlformats-package.core-properties+xml");
    over("/docProps/app.xml", &format!("{ct}.extended-properties+xml"));

    out.push_str("</Types>");
    out
}

fn root_rels() -> String {
    relationships(&[
        ("rId1".into(), "officeDocument", "ppt/presentation.xml".into()),
        (
            "rId2".into(),
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            "docProps/core.xml".into(),
        ),
        ("rId3".into(), "extended-properties", "docProps/app.xml".into()),
    ])
}

fn core_props(plan: &DeckPlan) -> String {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        r#"{XML_DECL}<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{title}</dc:title><dc:subject>{subject}</dc:subject><dc:creator>{author}</dc:creator><cp:lastModifiedBy>{author}</cp:lastModifiedBy><cp:revision>1</cp:revision><dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified></cp:coreProperties>"#,
        title = escape(&plan.title),
        subject = escape(&plan.subject),
        author = escape(&plan.author),
    )
}

fn app_props(slides: usize, notes: usize) -> String {
    format!(
        r#"{XML_DECL}<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"><Application>MagicSlides</Application><PresentationFormat>Widescreen</PresentationFormat><Slides>{slides}</Slides><Notes>{notes}</Notes></Properties>"#
    )
}

/// Relationship ids in `presentation.xml.rels`: rId1 master, rId2.. slides,
/// then notes master, theme and the three property parts.
fn presentation_rel_ids(slide_count: usize) -> [String; 5] {
    let base = slide_count + 2;
    [0, 1, 2, 3, 4].map(|offset| format!("rId{}", base + offset))
}

fn presentation(slide_count: usize) -> String {
    let [notes_master, ..] = presentation_rel_ids(slide_count);
    let slide_ids: String = (0..slide_count)
        .map(|i| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, SLIDE_ID_BASE + i, i + 2))
        .collect();
    format!(
        r#"{XML_DECL}<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" saveSubsetFonts="1"><p:sldMasterIdLst><p:sldMasterId id="{MASTER_ID}" r:id="rId1"/></p:sldMasterIdLst><p:notesMasterIdLst><p:notesMasterId r:id="{notes_master}"/></p:notesMasterIdLst><p:sldIdLst>{slide_ids}</p:sldIdLst><p:sldSz cx="{SLIDE_CX}" cy="{SLIDE_CY}"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#
    )
}

fn presentation_rels(slide_count: usize) -> String {
    let [notes_master, theme, pres_props, view_props, table_styles] =
        presentation_rel_ids(slide_count);
    let mut rels = vec![(
        "rId1".to_string(),
        "slideMaster",
        "slideMasters/slideMaster1.xml".to_string(),
    )];
    for n in 1..=slide_count {
        rels.push((format!("rId{}", n + 1), "slide", format!("slides/slide{n}.xml")));
    }
    rels.push((notes_master, "notesMaster", "notesMasters/notesMaster1.xml".into()));
    rels.push((theme, "theme", "theme/theme1.xml".into()));
    rels.push((pres_props, "presProps", "presProps.xml".into()));
    rels.push((view_props, "viewProps", "viewProps.xml".into()));
    rels.push((table_styles, "tableStyles", "tableStyles.xml".into()));
    relationships(&rels)
}

fn pres_props() -> String {
    format!(r#"{XML_DECL}<p:presentationPr xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"/>"#)
}

fn view_props() -> String {
    format!(
        r#"{XML_DECL}<p:viewPr xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr><p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#
    )
}

fn table_styles() -> String {
    format!(
        r#"{XML_DECL}<a:tblStyleLst xmlns:a="{NS_A}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#
    )
}

fn theme(plan: &DeckPlan, name: &str) -> String {
    let dk2 = hex_color(&plan.theme.primary_color, DEFAULT_PRIMARY_COLOR);
    let accent = hex_color(&plan.theme.secondary_color, DEFAULT_SECONDARY_COLOR);
    let lt2 = hex_color(&plan.theme.background_color, DEFAULT_BACKGROUND_COLOR);
    let font = escape(&plan.theme.font_family);
    let solid = |c: &str| format!(r#"<a:solidFill><a:srgbClr val="{c}"/></a:solidFill>"#);
    let line = |w: u32| format!(r#"<a:ln w="{w}"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#);
    let phclr = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    format!(
        r#"{XML_DECL}<a:theme xmlns:a="{NS_A}" name="{name}"><a:themeElements><a:clrScheme name="MagicSlides"><a:dk1><a:srgbClr val="000000"/></a:dk1><a:lt1><a:srgbClr val="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="{dk2}"/></a:dk2><a:lt2><a:srgbClr val="{lt2}"/></a:lt2><a:accent1><a:srgbClr val="{accent}"/></a:accent1><a:accent2><a:srgbClr val="ED7D31"/></a:accent2><a:accent3><a:srgbClr val="A5A5A5"/></a:accent3><a:accent4><a:srgbClr val="FFC000"/></a:accent4><a:accent5><a:srgbClr val="5B9BD5"/></a:accent5><a:accent6><a:srgbClr val="70AD47"/></a:accent6><a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink></a:clrScheme><a:fontScheme name="MagicSlides"><a:majorFont><a:latin typeface="{font}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="{font}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="MagicSlides"><a:fillStyleLst>{phclr}{phclr}{phclr}</a:fillStyleLst><a:lnStyleLst>{l1}{l2}{l3}</a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst>{phclr}{bg}{bg}</a:bgFillStyleLst></a:fmtScheme></a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>"#,
        name = escape(name),
        l1 = line(6350),
        l2 = line(12700),
        l3 = line(19050),
        bg = solid(&lt2),
    )
}

const GROUP_HEADER: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

const CLR_MAP: &str = r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#;

fn slide_master(plan: &DeckPlan) -> String {
    let background = hex_color(&plan.theme.background_color, DEFAULT_BACKGROUND_COLOR);
    format!(
        r#"{XML_DECL}<p:sldMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="{background}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg><p:spTree>{GROUP_HEADER}{rule}</p:spTree></p:cSld>{CLR_MAP}<p:sldLayoutIdLst><p:sldLayoutId id="{LAYOUT_ID}" r:id="rId1"/></p:sldLayoutIdLst></p:sldMaster>"#,
        rule = rule_xml(&plan.rule, 2),
    )
}

fn rule_xml(rule: &Rule, id: usize) -> String {
    let color = hex_color(&rule.color, DEFAULT_SECONDARY_COLOR);
    format!(
        r#"<p:cxnSp><p:nvCxnSpPr><p:cNvPr id="{id}" name="Rule"/><p:cNvCxnSpPr/><p:nvPr userDrawn="1"/></p:nvCxnSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="line"><a:avLst/></a:prstGeom><a:ln w="{w}"><a:solidFill><a:srgbClr val="{color}"/></a:solidFill></a:ln></p:spPr></p:cxnSp>"#,
        x = emu(rule.frame.x),
        y = emu(rule.frame.y),
        cx = emu(rule.frame.w),
        cy = emu(rule.frame.h),
        w = i64::from(rule.width_pt) * EMU_PER_POINT,
    )
}

fn slide_layout() -> String {
    format!(
        r#"{XML_DECL}<p:sldLayout xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" preserve="1"><p:cSld name="MASTER_SLIDE"><p:spTree>{GROUP_HEADER}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#
    )
}

fn notes_master() -> String {
    format!(
        r#"{XML_DECL}<p:notesMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:spTree>{GROUP_HEADER}<p:sp><p:nvSpPr><p:cNvPr id="2" name="Notes Placeholder 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" sz="quarter" idx="1"/></p:nvPr></p:nvSpPr><p:spPr><a:xfrm><a:off x="685800" y="4400550"/><a:ext cx="5486400" cy="3600450"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp></p:spTree></p:cSld>{CLR_MAP}</p:notesMaster>"#
    )
}

fn notes_slide(notes: &str) -> String {
    format!(
        r#"{XML_DECL}<p:notes xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:spTree>{GROUP_HEADER}<p:sp><p:nvSpPr><p:cNvPr id="2" name="Notes Placeholder 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody></p:sp></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:notes>"#,
        paragraphs = notes
            .lines()
            .map(|line| format!(r#"<a:p><a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#, escape(line)))
            .collect::<String>(),
    )
}

fn slide_xml(slide: &SlidePlan) -> String {
    let shapes: String = slide
        .boxes
        .iter()
        .enumerate()
        .map(|(i, text_box)| text_box_xml(text_box, i + 2))
        .collect();
    format!(
        r#"{XML_DECL}<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:spTree>{GROUP_HEADER}{shapes}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#
    )
}

fn text_box_xml(text_box: &TextBox, id: usize) -> String {
    let fill = match &text_box.fill {
        Some(color) => format!(
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            hex_color(color, "FFFFFF")
        ),
        None => "<a:noFill/>".to_string(),
    };
    let border = match &text_box.border {
        Some(b) => format!(
            r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
            i64::from(b.width_pt) * EMU_PER_POINT,
            hex_color(&b.color, DEFAULT_SECONDARY_COLOR)
        ),
        None => String::new(),
    };
    let anchor = match text_box.valign {
        VAlign::Top => "t",
        VAlign::Middle => "ctr",
    };
    let paragraphs: String = text_box.lines.iter().map(|line| paragraph_xml(text_box, line)).collect();

    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Text {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom>{fill}{border}</p:spPr><p:txBody><a:bodyPr wrap="square" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0" anchor="{anchor}"/><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#,
        x = emu(text_box.frame.x),
        y = emu(text_box.frame.y),
        cx = emu(text_box.frame.w),
        cy = emu(text_box.frame.h),
    )
}

fn paragraph_xml(text_box: &TextBox, line: &str) -> String {
    let align = match text_box.align {
        HAlign::Left => "l",
        HAlign::Center => "ctr",
    };
    let spacing = text_box
        .line_spacing
        .map(|pt| format!(r#"<a:lnSpc><a:spcPts val="{}"/></a:lnSpc>"#, pt * 100))
        .unwrap_or_default();
    let bold = if text_box.bold { r#" b="1""# } else { "" };
    format!(
        r#"<a:p><a:pPr algn="{align}">{spacing}</a:pPr><a:r><a:rPr lang="en-US" sz="{size}"{bold} dirty="0"><a:solidFill><a:srgbClr val="{color}"/></a:solidFill><a:latin typeface="{font}"/></a:rPr><a:t>{text}</a:t></a:r></a:p>"#,
        size = text_box.font_size * 100,
        color = hex_color(&text_box.color, DEFAULT_PRIMARY_COLOR),
        font = escape(&text_box.font_face),
        text = escape(line),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::presentation::{Layout, PresentationData, Slide, Theme};
    use crate::pptx::layout::plan_deck;
    use std::io::{Cursor, Read};

    fn deck() -> DeckPlan {
        plan_deck(&PresentationData {
            title: "Q3 <Review>".into(),
            subtitle: "Numbers & plans".into(),
            author: "MagicSlides AI".into(),
            slides: vec![
                Slide {
                    title: "Welcome".into(),
                    content: vec!["Quarterly review".into()],
                    layout: Layout::Title,
                    notes: "Open with the headline".into(),
                },
                Slide {
                    title: "Pros & cons".into(),
                    content: vec!["a".into(), "b".into(), "c".into()],
                    layout: Layout::TwoColumn,
                    notes: String::new(),
                },
            ],
            theme: Theme::default(),
        })
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut out = String::new();
        part.read_to_string(&mut out).unwrap();
        out
    }

    fn render(plan: &DeckPlan) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        write_pptx_to(plan, &mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn package_has_one_part_per_slide() {
        let bytes = render(&deck());
        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"[Content_Types].xml"));
        assert!(names.contains(&"ppt/slides/slide1.xml"));
        assert!(names.contains(&"ppt/slides/slide2.xml"));
        assert!(!names.contains(&"ppt/slides/slide3.xml"));
        assert!(names.contains(&"ppt/notesSlides/notesSlide1.xml"));
        assert!(!names.contains(&"ppt/notesSlides/notesSlide2.xml"));
    }

    #[test]
    fn text_is_escaped_in_slides_and_properties() {
        let bytes = render(&deck());
        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Q3 &lt;Review&gt;</dc:title>"));
        assert!(core.contains("<dc:subject>Numbers &amp; plans</dc:subject>"));
        let slide = read_part(&bytes, "ppt/slides/slide2.xml");
        assert!(slide.contains("<a:t>Pros &amp; cons</a:t>"));
        assert!(slide.contains("<a:t>• a</a:t>"));
    }

    #[test]
    fn presentation_lists_every_slide() {
        let bytes = render(&deck());
        let pres = read_part(&bytes, "ppt/presentation.xml");
        assert!(pres.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(pres.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(pres.contains(r#"<p:notesMasterId r:id="rId4"/>"#));
        let rels = read_part(&bytes, "ppt/_rels/presentation.xml.rels");
        assert!(rels.contains(r#"Id="rId4""#));
        assert!(rels.contains("notesMasters/notesMaster1.xml"));
    }

    #[test]
    fn master_carries_background_and_rule() {
        let bytes = render(&deck());
        let master = read_part(&bytes, "ppt/slideMasters/slideMaster1.xml");
        assert!(master.contains(r#"<a:srgbClr val="FFFFFF"/>"#));
        assert!(master.contains(r#"<a:ln w="38100">"#));
        assert!(master.contains(r#"<a:srgbClr val="3B82F6"/>"#));
    }

    #[test]
    fn notes_slide_links_back_to_its_slide() {
        let bytes = render(&deck());
        let rels = read_part(&bytes, "ppt/slides/_rels/slide1.xml.rels");
        assert!(rels.contains("../notesSlides/notesSlide1.xml"));
        let notes = read_part(&bytes, "ppt/notesSlides/notesSlide1.xml");
        assert!(notes.contains("<a:t>Open with the headline</a:t>"));
    }
}
