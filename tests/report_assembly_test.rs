use aspe::questions::load_question_bank;
use aspe::{
    build_records, render_report, AnswerSheet, ChartImage, InputError, MaturityTier, ReportAssembler,
    ReportError, ReportMeta, Section,
};
use aspe::io::writers::MarkdownWriter;
use pretty_assertions::assert_eq;
use std::path::Path;

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn small_business_records() -> Vec<aspe::AnswerRecord> {
    let bank = load_question_bank(&fixture("questions.toml")).unwrap();
    let sheet = AnswerSheet::load(&fixture("answers_small_business.toml")).unwrap();
    build_records(&bank, "Small business", &sheet).unwrap()
}

#[test]
fn incomplete_question_rows_are_dropped() {
    let bank = load_question_bank(&fixture("questions.toml")).unwrap();
    assert_eq!(bank.len(), 6);
    assert_eq!(bank.profiles(), vec!["Individual", "Small business"]);
    assert_eq!(
        bank.blocks("Small business"),
        vec!["Access control", "Backups", "Personal data"]
    );
}

#[test]
fn small_business_diagnostic() {
    let records = small_business_records();
    let mut charts = 0;
    let report = ReportAssembler::new(ReportMeta {
        title: "ASPE".into(),
        profile: Some("Small business".into()),
    })
    .assemble(&records, &mut |_: &[aspe::AnswerRecord]| -> anyhow::Result<ChartImage> {
        charts += 1;
        Ok(ChartImage::new("image/png", vec![0x89, b'P', b'N', b'G']))
    })
    .unwrap();

    // 23 failure points out of 50
    assert_eq!(report.overall.risk_percent, 46);
    assert_eq!(report.overall.tier, MaturityTier::Intermediate);
    assert_eq!(charts, 4);

    let blocks: Vec<(&str, u8, MaturityTier)> = report
        .blocks
        .values()
        .map(|b| (b.block.as_str(), b.score.risk_percent, b.score.tier))
        .collect();
    assert_eq!(
        blocks,
        vec![
            ("Access control", 67, MaturityTier::Low),
            ("Backups", 25, MaturityTier::Intermediate),
            ("Personal data", 0, MaturityTier::High),
        ]
    );

    assert_eq!(report.sections.len(), 6);
    assert!(matches!(report.sections[0], Section::Summary { .. }));
    assert!(matches!(report.sections[5], Section::Recommendations { .. }));
}

#[test]
fn markdown_report_lists_recommendations_per_block() {
    let records = small_business_records();
    let report = ReportAssembler::default()
        .assemble(&records, &mut aspe::TextChartProvider::new(20))
        .unwrap();

    let mut writer = MarkdownWriter::without_timestamp(Vec::new());
    render_report(&report, &mut writer).unwrap();
    let markdown = String::from_utf8(writer.into_inner()).unwrap();

    let access = markdown.find("### Access control\n").unwrap();
    let backups = markdown.find("### Backups\n").unwrap();
    let personal = markdown.find("### Personal data\n").unwrap();
    assert!(access < backups && backups < personal);

    assert!(markdown.contains("  - Require MFA for every privileged account."));
    assert!(markdown.contains("  - Schedule restore drills at least twice a year."));
    assert!(!markdown.contains("Adopt a company password manager."));
    assert!(markdown.contains("### Personal data\n\n_No additional recommendations._"));
}

#[test]
fn invalid_answer_sheet_is_an_input_error() {
    let bank = load_question_bank(&fixture("questions.toml")).unwrap();
    let sheet = AnswerSheet::load(&fixture("answers_invalid.toml")).unwrap();
    let err = build_records(&bank, "Individual", &sheet).unwrap_err();
    assert_eq!(
        err,
        InputError::UnknownAnswer {
            value: "sometimes".into()
        }
    );
}

#[test]
fn empty_answer_set_never_produces_a_report() {
    let err = ReportAssembler::default()
        .assemble(&[], &mut aspe::TextChartProvider::default())
        .unwrap_err();
    assert!(matches!(err, ReportError::Input(InputError::EmptyAnswerSet)));
    assert_eq!(err.code(), "E010");
}
