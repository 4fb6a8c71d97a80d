use crate::preprocessor::directive::Directive;

/// Tracks which kind of non-code text the scanner is inside.
///
/// Each flag is independent; a directive marker only counts when all four
/// are clear.
#[derive(Debug, Default, Clone, Copy)]
struct ScanState {
    in_string:        bool,
    in_line_comment:  bool,
    in_curly_comment: bool,
    in_paren_comment: bool,
}

impl ScanState {
    const fn is_code(self) -> bool {
        !(self.in_string || self.in_line_comment || self.in_curly_comment || self.in_paren_comment)
    }
}

/// Locates every compiler directive in `source`, in textual order.
///
/// Directives are `{$...}` or `(*$...*)` comments found in code, not inside
/// a string literal or another comment. Each directive runs to the close
/// marker matching its own open marker. A string literal never spans lines,
/// so a newline ends an unterminated one. A directive with no close marker
/// turns the rest of the text into a comment and is not reported.
///
/// The scan is pure: symbols are not defined here and no condition is
/// evaluated.
///
/// # Example
/// ```
/// use pascond::preprocessor::{directive::DirectiveKind, scanner::scan};
///
/// let source = "s := '{$IFDEF X}';\n// {$DEFINE Y}\n(*$IFDEF Z*)begin end;{$ENDIF}";
/// let directives = scan(source);
///
/// assert_eq!(directives.len(), 2);
/// assert_eq!(directives[0].kind, DirectiveKind::IfDef);
/// assert_eq!(directives[0].argument, "Z");
/// assert_eq!(directives[0].line, 3);
/// assert_eq!(directives[1].kind, DirectiveKind::EndIf);
/// ```
#[must_use]
pub fn scan(source: &str) -> Vec<Directive> {
    let bytes = source.as_bytes();
    let mut directives = Vec::new();
    let mut state = ScanState::default();
    let mut line = 1;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        let next = bytes.get(i + 1).copied();

        if byte == b'\n' {
            line += 1;
            state.in_string = false;
            state.in_line_comment = false;
            i += 1;
            continue;
        }

        if state.in_line_comment {
            i += 1;
            continue;
        }
        if state.in_curly_comment {
            state.in_curly_comment = byte != b'}';
            i += 1;
            continue;
        }
        if state.in_paren_comment {
            if byte == b'*' && next == Some(b')') {
                state.in_paren_comment = false;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }
        if state.in_string {
            state.in_string = byte != b'\'';
            i += 1;
            continue;
        }

        debug_assert!(state.is_code());

        match (byte, next) {
            (b'\'', _) => {
                state.in_string = true;
                i += 1;
            },
            (b'/', Some(b'/')) => {
                state.in_line_comment = true;
                i += 2;
            },
            (b'{', Some(b'$')) => match read_directive(source, i, 2, "}", line) {
                Some(directive) => {
                    line += count_lines(&source[i..directive.end]);
                    i = directive.end;
                    directives.push(directive);
                },
                None => break,
            },
            (b'{', _) => {
                state.in_curly_comment = true;
                i += 1;
            },
            (b'(', Some(b'*')) if bytes.get(i + 2) == Some(&b'$') => {
                match read_directive(source, i, 3, "*)", line) {
                    Some(directive) => {
                        line += count_lines(&source[i..directive.end]);
                        i = directive.end;
                        directives.push(directive);
                    },
                    None => break,
                }
            },
            (b'(', Some(b'*')) => {
                state.in_paren_comment = true;
                i += 2;
            },
            _ => i += 1,
        }
    }

    directives
}

/// Reads the directive whose open marker starts at `start` and is
/// `open_len` bytes long, up to the first `close` marker.
fn read_directive(source: &str,
                  start: usize,
                  open_len: usize,
                  close: &str,
                  line: usize)
                  -> Option<Directive> {
    let body_start = start + open_len;
    let body_len = source.get(body_start..)?.find(close)?;
    let body_end = body_start + body_len;

    Some(Directive::from_body(&source[body_start..body_end],
                              start,
                              body_end + close.len(),
                              line))
}

fn count_lines(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count()
}
