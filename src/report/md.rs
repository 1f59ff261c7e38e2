use crate::request::VehicleAnalysis;
use crate::types::result::SectionResult;
use crate::types::selection::Direction;

pub fn to_markdown(analysis: &VehicleAnalysis, decimals: usize) -> String {
    let result = &analysis.result;
    let fmt = |value: f64| format!("{value:.decimals$}");

    let mut output = String::new();
    output.push_str(&format!("# UVA Report: {}\n\n", analysis.vehicle));
    output.push_str(&format!(
        "Final score: {} (enhanced {}, reduced {})\n\n",
        fmt(result.final_score),
        fmt(result.total_enhanced),
        fmt(result.total_reduced)
    ));

    let count = result.meta.selection_count;
    output.push_str("## Selections\n\n");
    output.push_str(&format!(
        "- PETS entries: {}\n- UV selections: {} (enhanced {}, reduced {})\n\n",
        count.pets, count.uv, count.enhanced, count.reduced
    ));

    for (direction, section) in [
        (Direction::Enhanced, &result.enhanced),
        (Direction::Reduced, &result.reduced),
    ] {
        push_section(&mut output, direction, section, &fmt);
    }

    let summary = result.meta.validation_summary;
    let notes: Vec<&str> = [
        (!summary.has_selections, "no UV selections were made"),
        (summary.missing_kano_type, "Kano type is missing"),
        (summary.missing_usage_rate, "usage rate is missing"),
        (summary.missing_penetration_rate, "penetration rate is missing"),
    ]
    .into_iter()
    .filter_map(|(flag, note)| flag.then_some(note))
    .collect();

    output.push_str("## Notes\n\n");
    if notes.is_empty() {
        output.push_str("- none\n");
    } else {
        for note in notes {
            output.push_str(&format!("- {note}\n"));
        }
    }

    output
}

fn push_section(
    output: &mut String,
    direction: Direction,
    section: &SectionResult,
    fmt: &dyn Fn(f64) -> String,
) {
    let heading = match direction {
        Direction::Enhanced => "Enhanced",
        Direction::Reduced => "Reduced",
    };
    output.push_str(&format!("## {heading} ({})\n\n", fmt(section.total_score)));

    if section.pets_list.is_empty() {
        output.push_str("- none\n\n");
        return;
    }

    for pets in &section.pets_list {
        output.push_str(&format!(
            "### {} ({}): {}\n\n",
            pets.pets_name,
            pets.pets_id,
            fmt(pets.total_score)
        ));
        if pets.requirement_groups.is_empty() {
            output.push_str("- no matching UV\n\n");
            continue;
        }
        for group in &pets.requirement_groups {
            output.push_str(&format!(
                "- {}: {}\n",
                group.category_name,
                fmt(group.total_score)
            ));
            for l1 in &group.l1_list {
                output.push_str(&format!("  - {}: {}\n", l1.l1_name, fmt(l1.total_score)));
                for l2 in &l1.l2_list {
                    output.push_str(&format!("    - {}: {}\n", l2.l2_name, fmt(l2.score)));
                }
            }
        }
        output.push('\n');
    }
}
