use crate::questions::{load_question_bank, QuestionBank};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub fn list_profiles(questions: &Path, with_blocks: bool) -> Result<()> {
    let bank = load_question_bank(questions)?;
    let stdout = std::io::stdout();
    write_profiles(&bank, with_blocks, &mut stdout.lock())
}

pub(crate) fn write_profiles(bank: &QuestionBank, with_blocks: bool, out: &mut dyn Write) -> Result<()> {
    for profile in bank.profiles() {
        let count = bank.for_profile(profile).count();
        let noun = if count == 1 { "question" } else { "questions" };
        writeln!(out, "{profile} ({count} {noun})")?;
        if with_blocks {
            for block in bank.blocks(profile) {
                writeln!(out, "  - {block}")?;
            }
        }
    }
    Ok(())
}
