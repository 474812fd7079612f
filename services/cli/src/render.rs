use career_fit::assessment::{AssessmentResults, QuestionCatalog, ResultsView};
use career_fit::error::AppError;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::io::{self, Write};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Serialize)]
struct ResultsEnvelope<'a> {
    completed_at: DateTime<Local>,
    results: &'a AssessmentResults,
}

pub(crate) fn write_results_json<W: Write>(
    results: &AssessmentResults,
    out: &mut W,
) -> Result<(), AppError> {
    let envelope = ResultsEnvelope {
        completed_at: Local::now(),
        results,
    };
    serde_json::to_writer_pretty(&mut *out, &envelope)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn render_results<W: Write>(results: &AssessmentResults, out: &mut W) -> io::Result<()> {
    let view = ResultsView::from_results(results);

    writeln!(out, "\nAssessment Complete")?;
    writeln!(out, "[{}] {}% Match", view.badge, view.match_percent)?;
    writeln!(out, "{}", view.message)?;
    writeln!(out, "Confidence: {}%", view.confidence_percent)?;

    writeln!(out, "\nScore Breakdown")?;
    for line in &view.breakdown {
        writeln!(
            out,
            "  {:<22} {} {:>3}%",
            line.label,
            bar(line.percent),
            line.percent
        )?;
    }

    writeln!(out, "\nWISCAR Analysis")?;
    for line in &view.wiscar {
        writeln!(
            out,
            "  {:<22} {} {:>3}%",
            line.label,
            bar(line.percent),
            line.percent
        )?;
    }

    writeln!(out, "\nPersonalized Insights")?;
    for insight in &view.insights {
        writeln!(out, "  - {}", insight)?;
    }

    writeln!(out, "\nRecommended Next Steps")?;
    for (index, step) in view.next_steps.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, step)?;
    }

    if let Some(roles) = &view.alternative_roles {
        writeln!(out, "\nAlternative Career Paths")?;
        for role in roles {
            writeln!(out, "  - {}", role)?;
        }
    }

    Ok(())
}

pub(crate) fn render_catalog<W: Write>(catalog: &QuestionCatalog, out: &mut W) -> io::Result<()> {
    for (index, section) in catalog.sections().iter().enumerate() {
        writeln!(
            out,
            "{}. {} (weight {}%, {} questions)",
            index + 1,
            section.title,
            section.total_weight,
            section.questions.len()
        )?;
        writeln!(out, "   {}", section.description)?;
        for question in &section.questions {
            writeln!(out, "   [{}] {}", question.id, question.text)?;
            for (option, label) in question.option_labels().iter().enumerate() {
                writeln!(out, "      {}) {}", option + 1, label)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn bar(percent: u8) -> String {
    let filled = (percent as usize * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH))
    )
}
