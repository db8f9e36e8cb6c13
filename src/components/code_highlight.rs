use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const CPP_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
    "return", "goto", "class", "struct", "union", "enum", "public", "private", "protected",
    "virtual", "override", "static", "const", "constexpr", "inline", "template", "typename",
    "namespace", "using", "new", "delete", "this", "true", "false", "nullptr", "sizeof",
    "typedef", "operator", "friend", "try", "catch", "throw", "auto", "extern", "mutable",
];

const CPP_TYPES: &[&str] = &[
    "int", "long", "short", "char", "bool", "float", "double", "void", "unsigned", "signed",
    "size_t", "string", "vector", "pair", "map", "unordered_map", "set", "queue", "stack",
    "priority_queue", "deque", "list", "std",
];

const C_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
    "return", "goto", "struct", "union", "enum", "static", "const", "inline", "sizeof",
    "typedef", "extern", "register", "volatile", "true", "false", "NULL",
];

const C_TYPES: &[&str] = &[
    "int", "long", "short", "char", "bool", "float", "double", "void", "unsigned", "signed",
    "size_t", "FILE",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "if", "elif", "else", "for", "while", "in", "not", "and", "or", "is",
    "return", "yield", "import", "from", "as", "pass", "break", "continue", "lambda", "with",
    "try", "except", "finally", "raise", "global", "nonlocal", "True", "False", "None", "self",
];

const PYTHON_TYPES: &[&str] = &[
    "int", "float", "str", "bool", "list", "dict", "tuple", "set", "List", "Dict", "Tuple",
    "Optional", "range", "len", "print",
];

const JAVA_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
    "return", "class", "interface", "extends", "implements", "public", "private",
    "protected", "static", "final", "abstract", "new", "this", "super", "import", "package",
    "try", "catch", "finally", "throw", "throws", "true", "false", "null", "instanceof",
];

const JAVA_TYPES: &[&str] = &[
    "int", "long", "short", "char", "boolean", "float", "double", "void", "byte", "String",
    "Integer", "List", "ArrayList", "Map", "HashMap", "Arrays", "System", "Queue",
    "LinkedList", "Stack", "Deque", "ArrayDeque",
];

/// Lexical rules for one language
#[derive(Debug)]
struct Syntax {
    keywords: &'static [&'static str],
    types: &'static [&'static str],
    line_comment: &'static str,
    block_comment: bool,
    /// `#` at the start of a line begins a directive
    preprocessor: bool,
    /// `"""` / `'''` delimit (possibly multi-line) strings
    triple_quotes: bool,
}

fn syntax_for(language: &str) -> Option<Syntax> {
    match language {
        "cpp" | "c++" => Some(Syntax {
            keywords: CPP_KEYWORDS,
            types: CPP_TYPES,
            line_comment: "//",
            block_comment: true,
            preprocessor: true,
            triple_quotes: false,
        }),
        "c" => Some(Syntax {
            keywords: C_KEYWORDS,
            types: C_TYPES,
            line_comment: "//",
            block_comment: true,
            preprocessor: true,
            triple_quotes: false,
        }),
        "python" | "py" => Some(Syntax {
            keywords: PYTHON_KEYWORDS,
            types: PYTHON_TYPES,
            line_comment: "#",
            block_comment: false,
            preprocessor: false,
            triple_quotes: true,
        }),
        "java" => Some(Syntax {
            keywords: JAVA_KEYWORDS,
            types: JAVA_TYPES,
            line_comment: "//",
            block_comment: true,
            preprocessor: false,
            triple_quotes: false,
        }),
        _ => None,
    }
}

/// Token types for source code
#[derive(Debug, PartialEq, Clone)]
enum Token {
    Keyword(String),
    Type(String),
    Function(String),
    String(String),
    Number(String),
    Comment(String),
    Preprocessor(String),
    Identifier(String),
    Whitespace(String),
    Punctuation(String),
}

fn starts_with_at(chars: &[char], i: usize, pattern: &str) -> bool {
    let mut idx = i;
    for p in pattern.chars() {
        if chars.get(idx) != Some(&p) {
            return false;
        }
        idx += 1;
    }
    !pattern.is_empty()
}

/// Index just past the first occurrence of `pattern` at or after `from`
fn end_of(chars: &[char], from: usize, pattern: &str) -> usize {
    let width = pattern.chars().count();
    (from..chars.len())
        .find(|&j| starts_with_at(chars, j, pattern))
        .map(|j| j + width)
        .unwrap_or(chars.len())
}

fn tokenize(code: &str, syntax: &Syntax) -> Vec<Token> {
    let chars: Vec<char> = code.chars().collect();
    let len = chars.len();
    let text = |a: usize, b: usize| chars[a..b].iter().collect::<String>();

    let mut tokens = Vec::new();
    let mut i = 0;
    // Only whitespace seen since the last newline
    let mut line_start = true;

    while i < len {
        let ch = chars[i];
        let start = i;

        if ch.is_whitespace() {
            while i < len && chars[i].is_whitespace() {
                if chars[i] == '\n' {
                    line_start = true;
                }
                i += 1;
            }
            tokens.push(Token::Whitespace(text(start, i)));
            continue;
        }

        let token = if starts_with_at(&chars, i, syntax.line_comment) {
            while i < len && chars[i] != '\n' {
                i += 1;
            }
            Token::Comment(text(start, i))
        } else if syntax.block_comment && starts_with_at(&chars, i, "/*") {
            i = end_of(&chars, i + 2, "*/");
            Token::Comment(text(start, i))
        } else if syntax.preprocessor && line_start && ch == '#' {
            while i < len && chars[i] != '\n' {
                i += 1;
            }
            Token::Preprocessor(text(start, i))
        } else if syntax.triple_quotes
            && (starts_with_at(&chars, i, "\"\"\"") || starts_with_at(&chars, i, "'''"))
        {
            let delimiter: String = chars[i..i + 3].iter().collect();
            i = end_of(&chars, i + 3, &delimiter);
            Token::String(text(start, i))
        } else if ch == '"' || ch == '\'' {
            i += 1;
            while i < len {
                match chars[i] {
                    '\\' => i = (i + 2).min(len),
                    c if c == ch => {
                        i += 1;
                        break;
                    }
                    '\n' => break,
                    _ => i += 1,
                }
            }
            Token::String(text(start, i))
        } else if ch.is_ascii_digit() {
            while i < len && (chars[i].is_ascii_alphanumeric() || chars[i] == '.' || chars[i] == '_') {
                i += 1;
            }
            Token::Number(text(start, i))
        } else if ch.is_alphanumeric() || ch == '_' {
            while i < len && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            classify_word(&text(start, i), syntax, chars.get(i) == Some(&'('))
        } else {
            i += 1;
            Token::Punctuation(text(start, i))
        };

        tokens.push(token);
        line_start = false;
    }

    tokens
}

/// Classify a word as keyword, type, function call, or identifier
fn classify_word(word: &str, syntax: &Syntax, before_paren: bool) -> Token {
    if syntax.keywords.contains(&word) {
        Token::Keyword(word.to_string())
    } else if syntax.types.contains(&word) {
        Token::Type(word.to_string())
    } else if before_paren {
        Token::Function(word.to_string())
    } else {
        Token::Identifier(word.to_string())
    }
}

fn token_style(token: Token) -> (Style, String) {
    match token {
        Token::Keyword(s) => (
            Style::default()
                .fg(Color::Rgb(86, 156, 214))
                .add_modifier(Modifier::BOLD),
            s,
        ),
        Token::Type(s) => (Style::default().fg(Color::Rgb(78, 201, 176)), s),
        Token::Function(s) => (Style::default().fg(Color::Rgb(220, 220, 170)), s),
        Token::String(s) => (Style::default().fg(Color::Rgb(206, 145, 120)), s),
        Token::Number(s) => (Style::default().fg(Color::Rgb(181, 206, 168)), s),
        Token::Comment(s) => (
            Style::default()
                .fg(Color::Rgb(106, 153, 85))
                .add_modifier(Modifier::ITALIC),
            s,
        ),
        Token::Preprocessor(s) => (Style::default().fg(Color::Rgb(197, 134, 192)), s),
        Token::Identifier(s) => (Style::default().fg(Color::Rgb(156, 220, 254)), s),
        Token::Whitespace(s) => (Style::default(), s),
        Token::Punctuation(s) => (Style::default().fg(Color::Rgb(212, 212, 212)), s),
    }
}

/// Convert source text into highlighted ratatui Lines
///
/// `language` is a tag such as `cpp` or `python`. Unknown tags are rendered
/// as plain text.
pub fn highlight_code(code: &str, language: &str) -> Vec<Line<'static>> {
    let syntax = match syntax_for(language) {
        Some(syntax) => syntax,
        None => return plain_lines(code),
    };

    let mut lines = Vec::new();
    let mut current_line_spans = Vec::new();

    for token in tokenize(code, &syntax) {
        let (style, text) = token_style(token);

        // Split by newlines to create proper Lines
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::from(std::mem::take(&mut current_line_spans)));
            }
            if !part.is_empty() {
                current_line_spans.push(Span::styled(part.replace('\t', "    "), style));
            }
        }
    }

    // Push the last line if it has content
    if !current_line_spans.is_empty() {
        lines.push(Line::from(current_line_spans));
    }

    // If no lines were created, return at least one empty line
    if lines.is_empty() {
        lines.push(Line::from(""));
    }

    lines
}

fn plain_lines(code: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = code
        .lines()
        .map(|line| Line::from(line.replace('\t', "    ")))
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}
