//! Line-oriented netlist parsing.
//!
//! ```text
//! gate <name> <and|or|not|const> <delay>
//! wire <srcGate> <srcPin> <dstGate> <dstPin> <delay>
//! -- full-line comment
//! gate a not 1.0 -- trailing comment
//! ```
//!
//! Names match `[A-Za-z0-9_]+` and delays are decimal seconds. Parsing never
//! fails outright: malformed lines are recorded as diagnostics and skipped,
//! so one pass reports every problem in the file.

use crate::{Circuit, CircuitBuilder, Diagnostic, Diagnostics};
use gatesim_types::GateKind;

/// Parse a netlist source into a circuit plus everything reported along
/// the way.
pub fn parse_netlist(source: &str) -> (Circuit, Diagnostics) {
    let mut builder = CircuitBuilder::new();

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let tokens = tokenize(raw);
        let Some((&command, fields)) = tokens.split_first() else {
            continue;
        };

        match command {
            "gate" => parse_gate(&mut builder, line_no, fields),
            "wire" => parse_wire(&mut builder, line_no, fields),
            other => builder.report(Diagnostic::Malformed {
                line: line_no,
                message: format!("unknown command: {}", other),
            }),
        }
    }

    builder.finish()
}

/// Split a line into tokens, dropping everything from the first `--` on.
fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .take_while(|t| !t.starts_with("--"))
        .collect()
}

fn parse_gate(builder: &mut CircuitBuilder, line_no: usize, fields: &[&str]) {
    let [name, kind, delay] = fields else {
        builder.report(Diagnostic::Malformed {
            line: line_no,
            message: "expected: gate <name> <kind> <delay>".to_owned(),
        });
        return;
    };

    if !is_name(name) {
        builder.report(Diagnostic::Malformed {
            line: line_no,
            message: format!("name expected: gate {} ...", name),
        });
        return;
    }

    let Ok(kind) = kind.parse::<GateKind>() else {
        builder.report(Diagnostic::UnknownGateKind {
            name: (*name).to_owned(),
            kind: (*kind).to_owned(),
        });
        return;
    };

    let Some(delay) = parse_delay(delay) else {
        builder.report(Diagnostic::Malformed {
            line: line_no,
            message: format!("delay expected: gate {} {} ...", name, kind),
        });
        return;
    };

    builder.add_gate(name, kind, delay);
}

fn parse_wire(builder: &mut CircuitBuilder, line_no: usize, fields: &[&str]) {
    let [src, src_pin, dst, dst_pin, delay] = fields else {
        builder.report(Diagnostic::Malformed {
            line: line_no,
            message: "expected: wire <srcGate> <srcPin> <dstGate> <dstPin> <delay>".to_owned(),
        });
        return;
    };

    if ![src, src_pin, dst, dst_pin].iter().all(|t| is_name(t)) {
        builder.report(Diagnostic::Malformed {
            line: line_no,
            message: format!("name expected: wire {} {} {} {} ...", src, src_pin, dst, dst_pin),
        });
        return;
    }

    let Some(delay) = parse_delay(delay) else {
        builder.report(Diagnostic::Malformed {
            line: line_no,
            message: format!("delay expected: wire {} {} {} {} ...", src, src_pin, dst, dst_pin),
        });
        return;
    };

    builder.connect(src, src_pin, dst, dst_pin, delay);
}

fn is_name(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a delay field as decimal seconds.
///
/// The grammar admits an optional leading sign and plain decimals, nothing
/// else. A negative value still parses here so the builder can record its
/// negative-delay diagnostic against the constructed declaration instead of
/// dropping the line outright.
fn parse_delay(token: &str) -> Option<f64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty()
        || !digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.')
    {
        return None;
    }
    token.parse::<f64>().ok().filter(|d| d.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnboundInputPolicy;

    #[test]
    fn test_parse_minimal_circuit() {
        let (circuit, diags) = parse_netlist(
            "gate c const 0.0\n\
             gate n not 1.0\n\
             wire c true n in 0.5\n",
        );

        assert!(diags.is_empty());
        assert_eq!(circuit.gate_count(), 2);
        assert_eq!(circuit.wire_count(), 1);

        let n = circuit.gate_id("n").unwrap();
        assert_eq!(circuit.gate(n).kind(), GateKind::Not);
        assert_eq!(circuit.gate(n).delay().as_secs_f64(), 1.0);
    }

    #[test]
    fn test_comments_and_blank_lines_are_ignored() {
        let (circuit, diags) = parse_netlist(
            "-- a comment line\n\
             \n\
             gate a not 1.0 -- trailing comment\n",
        );
        assert!(diags.is_empty());
        assert_eq!(circuit.gate_count(), 1);
    }

    #[test]
    fn test_unknown_command_is_reported_and_skipped() {
        let (circuit, diags) = parse_netlist("late a not 1.0\ngate b not 1.0\n");
        assert_eq!(circuit.gate_count(), 1);
        assert_eq!(diags.len(), 1);
        assert!(diags.entries()[0].to_string().contains("unknown command"));
    }

    #[test]
    fn test_malformed_lines_accumulate_without_stopping() {
        let (circuit, diags) = parse_netlist(
            "gate a nand 1.0\n\
             gate b not\n\
             gate c not 1.0.0\n\
             gate d not 1.0\n",
        );

        // a: unknown kind, b: missing delay, c: junk delay; d still parses.
        assert_eq!(circuit.gate_count(), 1);
        assert_eq!(diags.len(), 3);
        assert!(diags.blocks_simulation(UnboundInputPolicy::Permissive));
    }

    #[test]
    fn test_negative_delay_declaration_still_constructs_the_gate() {
        let (circuit, diags) = parse_netlist(
            "gate n not -1.0\n\
             gate m not 1.0\n\
             wire n out m in 0.5\n",
        );

        // The gate is materialized (with its delay clamped) so the wire
        // against it resolves; the only diagnostic is the negative delay,
        // and it still withholds simulation.
        assert_eq!(circuit.gate_count(), 2);
        assert_eq!(circuit.wire_count(), 1);
        assert_eq!(
            diags.entries(),
            &[Diagnostic::NegativeDelay {
                declaration: "gate n not -1".into()
            }]
        );
        assert!(diags.blocks_simulation(UnboundInputPolicy::Permissive));
    }

    #[test]
    fn test_case_sensitive_gate_names() {
        let (circuit, diags) = parse_netlist("gate a not 1.0\ngate A not 1.0\n");
        assert!(diags.is_empty());
        assert_eq!(circuit.gate_count(), 2);
    }

    #[test]
    fn test_round_trip_reproduces_declarations() {
        let source = "gate   c const 0.0   -- oddly spaced\n\
                      gate n not 1.5\n\
                      gate a and 2\n\
                      wire c true n in 0.5\n\
                      wire n out a in1 0.25\n\
                      wire n out a in2 0.75\n";

        let (circuit, diags) = parse_netlist(source);
        assert!(diags.is_empty());

        let serialized = circuit.to_netlist();
        let (reparsed, rediags) = parse_netlist(&serialized);
        assert!(rediags.is_empty());

        // Semantically equivalent: identical declaration sets.
        assert_eq!(serialized, reparsed.to_netlist());
        assert_eq!(
            serialized,
            "gate c const 0\n\
             gate n not 1.5\n\
             gate a and 2\n\
             wire c true n in 0.5\n\
             wire n out a in1 0.25\n\
             wire n out a in2 0.75\n"
        );
    }
}
