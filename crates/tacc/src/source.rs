use std::io::BufRead;

/// Collects lines until every `{` seen so far has been closed again, or
/// the reader runs dry. At least one `{` must have been seen before the
/// braces count as balanced.
pub(crate) fn read_until_balanced(reader: impl BufRead) -> std::io::Result<String> {
    let mut code = String::new();
    let mut depth: i64 = 0;
    let mut opened = false;

    for line in reader.lines() {
        let line = line?;
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
        code.push_str(&line);
        code.push('\n');
        if opened && depth <= 0 {
            break;
        }
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_closing_brace() {
        let input = "int main() {\n  while (1) {\n  }\n}\nleftover\n";
        let code = read_until_balanced(input.as_bytes()).unwrap();
        assert_eq!(code, "int main() {\n  while (1) {\n  }\n}\n");
    }

    #[test]
    fn test_single_line_program() {
        let input = "int main(){return 0;}\nnext";
        let code = read_until_balanced(input.as_bytes()).unwrap();
        assert_eq!(code, "int main(){return 0;}\n");
    }

    #[test]
    fn test_eof_before_balance() {
        let code = read_until_balanced("int main() {\nreturn 1;".as_bytes()).unwrap();
        assert_eq!(code, "int main() {\nreturn 1;\n");
    }

    #[test]
    fn test_stray_closing_brace_before_open() {
        let code = read_until_balanced("}\nint main(){}\n".as_bytes()).unwrap();
        assert_eq!(code, "}\nint main(){}\n");
    }
}
