//! Markdown table report.
//!
//! Renders an [`EstimationResult`] as a human-readable report: a task table,
//! a QA table (only when QA augmentation ran), and a totals line.

use std::fmt::Write;

use crate::estimate::EstimationResult;

/// Render `result` as a Markdown report.
pub fn render_markdown(result: &EstimationResult) -> String {
    let mut out = String::new();
    write_report(&mut out, result).expect("writing to a String cannot fail");
    out
}

fn write_report(out: &mut String, result: &EstimationResult) -> std::fmt::Result {
    let buffers = &result.buffers;

    writeln!(out, "**Input**: {}", result.input)?;
    writeln!(out)?;

    let mut note = format!("Buffer(core)×{:.2}", buffers.core_buffer);
    if result.with_qa {
        write!(note, ", Buffer(QA)×{:.2}", buffers.qa_buffer)?;
    }
    if buffers.buffer_per_task {
        note.push_str(" (applied to task rows)");
    } else {
        note.push_str(" (task rows unbuffered, totals only)");
    }
    writeln!(out, "*{note}*")?;
    writeln!(out)?;

    writeln!(
        out,
        "| # | Task | Difficulty/Reason | Domain/Reason | Core h | QA h | Shown |"
    )?;
    writeln!(out, "|---|---|---|---|---:|---:|---:|")?;
    for (i, item) in result.items.iter().enumerate() {
        writeln!(
            out,
            "| {} | {} | {} ({}) | {} ({}) | {:.1}h | {:.1}h | **{:.1}h** |",
            i + 1,
            item.task,
            item.difficulty,
            item.difficulty_reason,
            item.domain,
            item.domain_reason,
            item.core_hours,
            item.qa_hours,
            item.shown_hours,
        )?;
    }
    writeln!(out)?;

    if result.with_qa {
        writeln!(out, "**QA (detected tasks only)**")?;
        writeln!(out)?;
        writeln!(
            out,
            "| Task | QA category | Recommended artifacts | Estimated cases | QA h (buffered) |"
        )?;
        writeln!(out, "|---|---|---|---:|---:|")?;
        for item in &result.items {
            let Some(qa) = &item.qa else { continue };
            writeln!(
                out,
                "| {} | {} | {} | {} | {:.1}h |",
                item.task,
                qa.category,
                qa.artifacts.join(" / "),
                qa.cases_estimate,
                qa.case_hours * buffers.qa_buffer,
            )?;
        }
        writeln!(out)?;
    }

    let totals = &result.totals;
    write!(
        out,
        "**Total ({})**: Core **{:.1}h**",
        result.profile, totals.core_hours
    )?;
    if result.with_qa {
        write!(out, " + QA **{:.1}h**", totals.qa_hours)?;
        if result.qa_included_in_total {
            write!(out, " = **{:.1}h**", totals.grand_total_hours)?;
        }
    }
    Ok(())
}
