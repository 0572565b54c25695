use crate::report::{PageWriter, ReportData, ReportMeta, Section};
use serde_json::{json, Value};
use std::io::Write;

/// Writes the whole report as a single JSON document once all sections are in.
pub struct JsonWriter<W: Write> {
    writer: W,
    sections: Vec<Value>,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sections: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PageWriter for JsonWriter<W> {
    fn begin(&mut self, _meta: &ReportMeta) -> anyhow::Result<()> {
        self.sections.clear();
        Ok(())
    }

    fn write_section(&mut self, section: &Section) -> anyhow::Result<()> {
        self.sections.push(serde_json::to_value(section)?);
        Ok(())
    }

    fn finish(&mut self, report: &ReportData) -> anyhow::Result<()> {
        let document = json!({
            "title": report.meta.title,
            "profile": report.meta.profile,
            "risk_percent": report.overall.risk_percent,
            "tier": report.overall.tier,
            "answers": report.records.len(),
            "sections": std::mem::take(&mut self.sections),
        });
        let json = serde_json::to_string_pretty(&document)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Answer, AnswerRecord};
    use crate::report::{render_report, ReportAssembler, TextChartProvider};

    #[test]
    fn document_lists_sections_in_order() {
        let records = vec![
            AnswerRecord::new("Network", "Firewall?", Answer::Partial, 2.0, "Configure it."),
            AnswerRecord::new("Access", "MFA?", Answer::Yes, 1.0, "Enable MFA."),
        ];
        let report = ReportAssembler::default()
            .assemble(&records, &mut TextChartProvider::default())
            .unwrap();

        let mut writer = JsonWriter::new(Vec::new());
        render_report(&report, &mut writer).unwrap();
        let value: Value = serde_json::from_slice(&writer.into_inner()).unwrap();

        assert_eq!(value["risk_percent"], 33);
        assert_eq!(value["tier"], "intermediate");
        assert_eq!(value["answers"], 2);

        let kinds: Vec<&str> = value["sections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["kind"].as_str().unwrap())
            .collect();
        assert_eq!(
            kinds,
            vec![
                "summary",
                "block_maturity",
                "block_chart",
                "block_chart",
                "recommendations"
            ]
        );
        assert_eq!(value["sections"][2]["block"], "Network");
        assert_eq!(value["sections"][1]["blocks"][1]["block"], "Access");
        assert_eq!(
            value["sections"][4]["blocks"][0]["items"][0]["answer"],
            "partial"
        );

        let chart = &value["sections"][2]["chart"];
        assert_eq!(chart["media_type"], "text/plain");
        assert!(chart["text"].as_str().unwrap().starts_with("Yes     |"));
    }
}
