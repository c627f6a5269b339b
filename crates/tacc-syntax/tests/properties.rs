use std::collections::HashMap;

use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};
use tacc_syntax::{CompileError, translate_to_string};

/// Statement shapes for generated programs.
#[derive(Debug, Clone)]
enum Stmt {
    Assign(u8),
    If(Vec<Stmt>),
    While(Vec<Stmt>),
}

impl Stmt {
    fn arbitrary_at(g: &mut Gen, depth: usize) -> Self {
        let choice = if depth == 0 { 0 } else { u8::arbitrary(g) % 3 };
        match choice {
            0 => Stmt::Assign(u8::arbitrary(g) % 4),
            1 => Stmt::If(Self::body(g, depth - 1)),
            _ => Stmt::While(Self::body(g, depth - 1)),
        }
    }

    fn body(g: &mut Gen, depth: usize) -> Vec<Stmt> {
        let len = usize::arbitrary(g) % 4;
        (0..len).map(|_| Self::arbitrary_at(g, depth)).collect()
    }

    fn render(&self, out: &mut String) {
        match self {
            Stmt::Assign(n) => out.push_str(&format!("v{n} = v{n} + {n};")),
            Stmt::If(body) => {
                out.push_str("if (a < 3) {");
                body.iter().for_each(|s| s.render(out));
                out.push('}');
            }
            Stmt::While(body) => {
                out.push_str("while (a != b) {");
                body.iter().for_each(|s| s.render(out));
                out.push('}');
            }
        }
    }

    fn count(&self, ifs: &mut usize, whiles: &mut usize) {
        match self {
            Stmt::Assign(_) => {}
            Stmt::If(body) => {
                *ifs += 1;
                body.iter().for_each(|s| s.count(ifs, whiles));
            }
            Stmt::While(body) => {
                *whiles += 1;
                body.iter().for_each(|s| s.count(ifs, whiles));
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Program(Vec<Stmt>);

impl Arbitrary for Program {
    fn arbitrary(g: &mut Gen) -> Self {
        Program(Stmt::body(g, 3))
    }
}

impl Program {
    fn source(&self) -> String {
        let mut out = String::from("int main() { int a = 0; int b = 1;");
        self.0.iter().for_each(|s| s.render(&mut out));
        out.push('}');
        out
    }
}

fn labels_are_defined_and_targeted_once(program: Program) -> TestResult {
    let output = translate_to_string(&program.source()).unwrap();

    let mut defined: HashMap<&str, usize> = HashMap::new();
    let mut targeted: HashMap<&str, usize> = HashMap::new();
    for line in output.lines() {
        if let Some(label) = line.strip_suffix(':') {
            *defined.entry(label).or_default() += 1;
        } else if let Some(rest) = line.split(" GOTO ").nth(1) {
            *targeted.entry(rest).or_default() += 1;
        } else if let Some(label) = line.strip_prefix("GOTO ") {
            *targeted.entry(label).or_default() += 1;
        }
    }

    let (mut ifs, mut whiles) = (0, 0);
    program.0.iter().for_each(|s| s.count(&mut ifs, &mut whiles));

    if defined.len() != 2 * (ifs + whiles) {
        return TestResult::failed();
    }
    let once = |map: &HashMap<&str, usize>| map.values().all(|&n| n == 1);
    let all_targeted = defined.keys().all(|l| targeted.contains_key(l));
    TestResult::from_bool(once(&defined) && once(&targeted) && all_targeted)
}

#[test]
fn labels_pair_up() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(labels_are_defined_and_targeted_once as fn(Program) -> TestResult);
}

/// Flat arithmetic over single-letter variables and small literals.
#[derive(Debug, Clone)]
struct Expression(String);

impl Arbitrary for Expression {
    fn arbitrary(g: &mut Gen) -> Self {
        let operands = ["a", "b", "c", "1", "2"];
        let ops = ["+", "-", "*", "/"];
        let len = usize::arbitrary(g) % 8;
        let mut text = g.choose(&operands).copied().unwrap_or("a").to_string();
        for _ in 0..len {
            let op = g.choose(&ops).copied().unwrap_or("+");
            let operand = g.choose(&operands).copied().unwrap_or("a");
            text.push_str(&format!(" {op} {operand}"));
        }
        Expression(text)
    }
}

fn temporaries_are_defined_in_order_before_use(expr: Expression) -> bool {
    let source = format!(
        "int main() {{ int a = 1; int b = 2; int c = 3; return {}; }}",
        expr.0
    );
    let output = translate_to_string(&source).unwrap();

    let mut next = 0;
    for line in output.lines() {
        let (lhs, rhs) = match line.split_once(" = ") {
            Some(parts) => parts,
            None => (line, ""),
        };
        let used = rhs.split(' ').chain(line.strip_prefix("RET "));
        for operand in used {
            let temp = operand.strip_prefix('t').and_then(|n| n.parse::<usize>().ok());
            if temp.is_some_and(|n| n >= next) {
                return false;
            }
        }
        if let Some(n) = lhs.strip_prefix('t').and_then(|n| n.parse::<usize>().ok()) {
            if n != next {
                return false;
            }
            next += 1;
        }
    }
    true
}

#[test]
fn temporaries_def_before_use() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(temporaries_are_defined_in_order_before_use as fn(Expression) -> bool);
}

fn any_at_sign_is_a_lexical_error(prefix: String, suffix: String) -> bool {
    let source = format!("{prefix}@{suffix}");
    matches!(
        translate_to_string(&source),
        Err(CompileError::UnknownCharacter { .. } | CompileError::LoneBang { .. })
    )
}

#[test]
fn at_sign_never_lexes() {
    QuickCheck::new()
        .tests(200)
        .quickcheck(any_at_sign_is_a_lexical_error as fn(String, String) -> bool);
}
