// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use lewis_render::{
    Diagram, DiagramBondKind, JsonRenderer, OutputFormat, RenderError, Renderer, SvgRenderer,
    TextRenderer,
};
use molecule::{evaluate, Evaluation, EvaluationOptions};
use periodic_table::PeriodicTable;

fn evaluation(formula: &str, charge: i32) -> Evaluation {
    let table = PeriodicTable::embedded().expect("embedded dataset should parse");
    evaluate(&table, formula, charge, &EvaluationOptions::default()).expect("formula should evaluate")
}

#[test]
fn test_diagram_mirrors_the_evaluation() {
    let diagram = Diagram::from_evaluation(&evaluation("NH3", 0));

    assert_eq!(diagram.formula, "NH3");
    assert_eq!(diagram.center, "N");
    assert_eq!(diagram.outer, "H");
    assert_eq!(diagram.electron_pool, 8);
    assert_eq!(diagram.atoms.len(), 4);
    assert_eq!(diagram.bonds.len(), 3);
    assert_eq!(diagram.lone_pairs.len(), 2);
    assert!(diagram
        .bonds
        .iter()
        .all(|bond| bond.kind == DiagramBondKind::Single));

    let nitrogen = &diagram.atoms[0];
    assert_eq!(nitrogen.label, "N");
    assert_eq!(nitrogen.position, [0.0, 0.0]);
    assert_eq!(nitrogen.loose_electrons, 2);
    assert_eq!(nitrogen.sigma_bonds, 3);
    assert_eq!(nitrogen.total_valence_electrons, 8);
    assert!(diagram.lone_pairs.iter().all(|marker| marker.atom == 0));
}

#[test]
fn test_json_output_is_a_diagram_document() {
    let json = JsonRenderer.render(&evaluation("OH", -1)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["formula"], "OH");
    assert_eq!(value["charge"], -1);
    assert_eq!(value["center"], "O");
    assert_eq!(value["atoms"][0]["formal_charge"], -1);
    assert_eq!(value["atoms"][0]["loose_electrons"], 6);
    assert_eq!(value["bonds"][0]["kind"], "single");
    assert_eq!(value["lone_pairs"].as_array().unwrap().len(), 6);
}

#[test]
fn test_text_report_lists_every_atom() {
    let report = TextRenderer.render(&evaluation("H2O", 0)).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "H2O (charge 0)");
    assert_eq!(lines[1], "center: O, outer: H x2");
    assert_eq!(lines[2], "electron pool: 8");
    assert!(lines[4].starts_with("atom"));

    let rows: Vec<Vec<&str>> = lines[5..]
        .iter()
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.contains(&vec!["O", "4", "2", "0", "0", "8"]));
    assert_eq!(rows.iter().filter(|row| row[0] == "H").count(), 2);
}

#[test]
fn test_svg_draws_bonds_labels_and_dots() {
    let svg = SvgRenderer::default().render(&evaluation("CO2", 0)).unwrap();

    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<line").count(), 2);
    assert_eq!(svg.matches("<circle").count(), 12);
    assert!(svg.contains(">C<"));
    assert_eq!(svg.matches(">O<").count(), 2);
    // Carbon carries +2 and each oxygen -1.
    assert!(svg.contains(">2+<"));
    assert_eq!(svg.matches(">\u{2212}<").count(), 2);
}

#[test]
fn test_output_format_names() {
    assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!(matches!(
        "png".parse::<OutputFormat>(),
        Err(RenderError::UnknownFormat(name)) if name == "png"
    ));
    assert_eq!(OutputFormat::Svg.to_string(), "svg");

    let rendered = OutputFormat::Text
        .renderer(100.0)
        .render(&evaluation("HF", 0))
        .unwrap();
    assert!(rendered.starts_with("HF (charge 0)"));
}

// End of File
