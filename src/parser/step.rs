use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum StepValue {
    String(String),
    Real(f64),
    Integer(i64),
    Boolean(bool),
    Enum(String),
    Reference(u64),
    List(Vec<StepValue>),
    /// Select-type value such as `IFCLABEL('x')`.
    Typed {
        type_name: String,
        value: Box<StepValue>,
    },
    Null,
    Derived,
}

impl StepValue {
    /// Parses one STEP literal such as `'text'`, `#12`, `.T.` or `(1.,2.)`.
    /// Anything unrecognised becomes a string.
    #[must_use]
    pub fn parse(text: &str) -> StepValue {
        StepFile::parse_single_value(text)
    }

    /// Strips any `Typed` wrappers.
    #[must_use]
    pub fn untyped(&self) -> &StepValue {
        match self {
            StepValue::Typed { value, .. } => value.untyped(),
            other => other,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self.untyped() {
            StepValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_enum(&self) -> Option<&str> {
        match self.untyped() {
            StepValue::Enum(e) => Some(e),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_reference(&self) -> Option<u64> {
        match self {
            StepValue::Reference(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self.untyped() {
            StepValue::Real(f) => Some(*f),
            StepValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Entity ids of a list of references; non-reference items are skipped.
    #[must_use]
    pub fn references(&self) -> Vec<u64> {
        match self {
            StepValue::List(list) => list.iter().filter_map(StepValue::as_reference).collect(),
            StepValue::Reference(id) => vec![*id],
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, StepValue::Null | StepValue::Derived)
    }

    /// Serialises the value in ISO 10303-21 exchange syntax.
    #[must_use]
    pub fn to_step(&self) -> String {
        match self {
            StepValue::String(s) => format!("'{}'", encode_step_string(s)),
            StepValue::Real(f) => format_real(*f),
            StepValue::Integer(i) => i.to_string(),
            StepValue::Boolean(true) => ".T.".to_string(),
            StepValue::Boolean(false) => ".F.".to_string(),
            StepValue::Enum(e) => format!(".{e}."),
            StepValue::Reference(id) => format!("#{id}"),
            StepValue::List(items) => format!(
                "({})",
                items
                    .iter()
                    .map(StepValue::to_step)
                    .collect::<Vec<_>>()
                    .join(",")
            ),
            StepValue::Typed { type_name, value } => format!("{type_name}({})", value.to_step()),
            StepValue::Null => "$".to_string(),
            StepValue::Derived => "*".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepEntity {
    pub id: u64,
    /// Upper-case STEP keyword, e.g. `IFCWALL`.
    pub entity_type: String,
    pub values: Vec<StepValue>,
}

impl StepEntity {
    /// `#12=IFCWALL('guid',#5,...)` form of the record.
    #[must_use]
    pub fn to_step(&self) -> String {
        format!(
            "#{}={}({})",
            self.id,
            self.entity_type,
            self.values
                .iter()
                .map(StepValue::to_step)
                .collect::<Vec<_>>()
                .join(",")
        )
    }
}

#[derive(Debug, Default)]
pub struct StepFile {
    pub entities: BTreeMap<u64, StepEntity>,
    pub schema: String,
    /// Raw HEADER statements without the trailing `;`.
    pub header: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Preamble,
    Header,
    Data,
    Done,
}

impl StepFile {
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let mut file = StepFile::default();
        let mut section = Section::Preamble;
        let mut saw_data = false;

        for statement in split_statements(content) {
            match statement.as_str() {
                "ISO-10303-21" => continue,
                "HEADER" => {
                    section = Section::Header;
                    continue;
                }
                "DATA" => {
                    section = Section::Data;
                    saw_data = true;
                    continue;
                }
                "ENDSEC" => {
                    section = Section::Preamble;
                    continue;
                }
                "END-ISO-10303-21" => {
                    section = Section::Done;
                    continue;
                }
                _ => {}
            }

            match section {
                Section::Header => {
                    if statement.starts_with("FILE_SCHEMA") {
                        file.schema = parse_schema_name(&statement).unwrap_or_default();
                    }
                    file.header.push(statement);
                }
                Section::Data if statement.starts_with('#') => {
                    if let Some(entity) = Self::parse_entity(&statement)? {
                        file.entities.insert(entity.id, entity);
                    }
                }
                _ => {}
            }
        }

        if !saw_data {
            return Err(ParseError::InvalidStep {
                message: "missing DATA section".to_string(),
            });
        }

        tracing::debug!(
            entities = file.entities.len(),
            schema = %file.schema,
            "parsed STEP file"
        );

        Ok(file)
    }

    fn parse_entity(statement: &str) -> Result<Option<StepEntity>, ParseError> {
        // Format: #123=IFCWALL('guid',#ref,'name',...)
        let invalid = |message: &str| ParseError::InvalidStep {
            message: format!("{message}: {}", truncate(statement, 60)),
        };

        let eq_pos = statement.find('=').ok_or_else(|| invalid("missing '='"))?;
        let id: u64 = statement[1..eq_pos]
            .trim()
            .parse()
            .map_err(|_| invalid("invalid entity id"))?;

        let rest = statement[eq_pos + 1..].trim();
        if rest.starts_with('(') {
            // Complex (multi-leaf) instances carry no IFC data we read.
            tracing::warn!(id, "skipping complex entity instance");
            return Ok(None);
        }
        let paren_pos = rest.find('(').ok_or_else(|| invalid("missing argument list"))?;
        if !rest.ends_with(')') {
            return Err(invalid("unterminated argument list"));
        }
        let entity_type = rest[..paren_pos].trim().to_ascii_uppercase();

        let values_str = &rest[paren_pos + 1..rest.len() - 1];
        let values = Self::parse_values(values_str);

        Ok(Some(StepEntity {
            id,
            entity_type,
            values,
        }))
    }

    fn parse_values(s: &str) -> Vec<StepValue> {
        let mut values = Vec::new();
        let mut current = String::new();
        let mut in_string = false;
        let mut paren_depth = 0;

        for ch in s.chars() {
            match ch {
                '\'' => {
                    in_string = !in_string;
                    current.push(ch);
                }
                '(' if !in_string => {
                    paren_depth += 1;
                    current.push(ch);
                }
                ')' if !in_string => {
                    paren_depth -= 1;
                    current.push(ch);
                }
                ',' if !in_string && paren_depth == 0 => {
                    values.push(Self::parse_single_value(current.trim()));
                    current.clear();
                }
                _ => current.push(ch),
            }
        }

        if !current.trim().is_empty() {
            values.push(Self::parse_single_value(current.trim()));
        }

        values
    }

    fn parse_single_value(s: &str) -> StepValue {
        let s = s.trim();

        if s == "$" {
            return StepValue::Null;
        }
        if s == "*" {
            return StepValue::Derived;
        }
        if let Some(stripped) = s.strip_prefix('#') {
            if let Ok(id) = stripped.parse::<u64>() {
                return StepValue::Reference(id);
            }
        }
        if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
            let raw = &s[1..s.len() - 1];
            return StepValue::String(decode_step_string(raw));
        }
        if s.len() >= 2 && s.starts_with('.') && s.ends_with('.') {
            let inner = &s[1..s.len() - 1];
            if inner == "T" {
                return StepValue::Boolean(true);
            }
            if inner == "F" {
                return StepValue::Boolean(false);
            }
            return StepValue::Enum(inner.to_string());
        }
        if s.starts_with('(') && s.ends_with(')') {
            let inner = &s[1..s.len() - 1];
            return StepValue::List(Self::parse_values(inner));
        }
        if let Ok(i) = s.parse::<i64>() {
            return StepValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return StepValue::Real(f);
        }
        // Typed value like IFCBOOLEAN(.T.)
        if s.starts_with(|c: char| c.is_ascii_alphabetic()) && s.ends_with(')') {
            if let Some(paren_pos) = s.find('(') {
                let inner = &s[paren_pos + 1..s.len() - 1];
                return StepValue::Typed {
                    type_name: s[..paren_pos].trim().to_ascii_uppercase(),
                    value: Box::new(Self::parse_single_value(inner)),
                };
            }
        }

        StepValue::String(s.to_string())
    }

    #[must_use]
    pub fn get_entity(&self, id: u64) -> Option<&StepEntity> {
        self.entities.get(&id)
    }

    pub fn get_entity_mut(&mut self, id: u64) -> Option<&mut StepEntity> {
        self.entities.get_mut(&id)
    }

    /// Serialises the file back to ISO 10303-21 text.
    #[must_use]
    pub fn to_step_string(&self) -> String {
        let mut out = String::from("ISO-10303-21;\nHEADER;\n");
        if self.header.is_empty() {
            let schema = if self.schema.is_empty() {
                "IFC4"
            } else {
                self.schema.as_str()
            };
            out.push_str("FILE_DESCRIPTION((''),'2;1');\n");
            out.push_str("FILE_NAME('','',(''),(''),'','','');\n");
            let _ = writeln!(out, "FILE_SCHEMA(('{schema}'));");
        } else {
            for statement in &self.header {
                let _ = writeln!(out, "{statement};");
            }
        }
        out.push_str("ENDSEC;\nDATA;\n");
        for entity in self.entities.values() {
            let _ = writeln!(out, "{};", entity.to_step());
        }
        out.push_str("ENDSEC;\nEND-ISO-10303-21;\n");
        out
    }
}

/// Splits exchange-file text into statements at `;` outside string literals,
/// dropping `/* */` comments and line breaks.
fn split_statements(content: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_string {
            if ch == '\'' {
                in_string = false;
            }
            current.push(ch);
            continue;
        }
        match ch {
            '\'' => {
                in_string = true;
                current.push(ch);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            ';' => {
                let statement = current.trim();
                if !statement.is_empty() {
                    statements.push(statement.to_string());
                }
                current.clear();
            }
            '\r' | '\n' => {}
            _ => current.push(ch),
        }
    }

    statements
}

fn parse_schema_name(statement: &str) -> Option<String> {
    let start = statement.find('\'')?;
    let end = statement[start + 1..].find('\'')?;
    Some(statement[start + 1..start + 1 + end].to_string())
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn format_real(f: f64) -> String {
    let s = format!("{f:?}");
    match s.find(['e', 'E']) {
        Some(pos) => {
            let (mantissa, exponent) = s.split_at(pos);
            if mantissa.contains('.') {
                format!("{mantissa}{}", exponent.to_ascii_uppercase())
            } else {
                format!("{mantissa}.{}", exponent.to_ascii_uppercase())
            }
        }
        None => s,
    }
}

/// Encode a string for a STEP literal (inverse of [`decode_step_string`]).
fn encode_step_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            ' '..='~' => out.push(ch),
            c if u32::from(c) <= 0xFFFF => {
                let _ = write!(out, "\\X2\\{:04X}\\X0\\", u32::from(c));
            }
            c => {
                let _ = write!(out, "\\X4\\{:08X}\\X0\\", u32::from(c));
            }
        }
    }
    out
}

/// Decode STEP/IFC encoded strings with Unicode escape sequences.
/// Supports:
/// - `\X2\XXXX\X0\` - 2-byte Unicode (BMP), can have multiple 4-char hex codes
/// - `\X4\XXXXXXXX\X0\` - 4-byte Unicode
/// - `\X\XX` - 1-byte ISO 8859-1
/// - `\S\X` - high-bit shift
/// - `\\` - escaped backslash
/// - `''` - escaped apostrophe
fn decode_step_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('X') => {
                    chars.next(); // consume 'X'
                    match chars.peek().copied() {
                        Some(width @ ('2' | '4')) => {
                            chars.next(); // consume width
                            chars.next(); // consume '\'

                            let mut hex = String::new();
                            while let Some(&c) = chars.peek() {
                                if c == '\\' {
                                    break;
                                }
                                hex.push(c);
                                chars.next();
                            }
                            // Skip \X0\
                            if chars.peek() == Some(&'\\') {
                                for _ in 0..4 {
                                    chars.next();
                                }
                            }
                            let chunk_len = if width == '2' { 4 } else { 8 };
                            for chunk in hex.as_bytes().chunks(chunk_len) {
                                if chunk.len() != chunk_len {
                                    continue;
                                }
                                let decoded = std::str::from_utf8(chunk)
                                    .ok()
                                    .and_then(|s| u32::from_str_radix(s, 16).ok())
                                    .and_then(char::from_u32);
                                if let Some(c) = decoded {
                                    result.push(c);
                                }
                            }
                        }
                        Some('\\') => {
                            // \X\ followed by 2 hex digits - ISO 8859-1
                            chars.next(); // consume '\'
                            let mut hex = String::new();
                            for _ in 0..2 {
                                if let Some(&c) = chars.peek() {
                                    hex.push(c);
                                    chars.next();
                                }
                            }
                            if let Ok(code) = u8::from_str_radix(&hex, 16) {
                                result.push(char::from(code));
                            }
                        }
                        _ => {
                            result.push('\\');
                            result.push('X');
                        }
                    }
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                Some('S') => {
                    // \S\X - single char shift (ISO 8859-1 high bit)
                    chars.next(); // 'S'
                    chars.next(); // '\'
                    if let Some(c) = chars.next().and_then(|c| char::from_u32(u32::from(c) + 128)) {
                        result.push(c);
                    }
                }
                _ => result.push('\\'),
            }
        } else if ch == '\'' {
            // '' is escaped apostrophe in STEP
            if chars.peek() == Some(&'\'') {
                chars.next();
            }
            result.push('\'');
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SMALL: &str = "ISO-10303-21;
HEADER;
FILE_DESCRIPTION(('ViewDefinition [CoordinationView]'),'2;1');
FILE_SCHEMA(('IFC4'));
ENDSEC;
DATA;
/* a comment; with a semicolon */
#1=IFCPROJECT('0YvctVUKr0kugbFTf53O9L',$,'It''s a project',$,$,$,$,$,$);
#2=IFCPROPERTYSINGLEVALUE('Note',$,IFCTEXT('a;b, (c)'),
  $);
#3=IFCWALL('g',$,'Caf\\X2\\00E9\\X0\\',$,$,$,$,$,.SOLIDWALL.);
#4=IFCQUANTITYLENGTH('Width',$,$,200.,$);
ENDSEC;
END-ISO-10303-21;
";

    #[test]
    fn parses_header_and_records() {
        let file = StepFile::parse(SMALL).unwrap();
        assert_eq!(file.schema, "IFC4");
        assert_eq!(file.entities.len(), 4);
        assert_eq!(file.header.len(), 2);

        let project = file.get_entity(1).unwrap();
        assert_eq!(project.entity_type, "IFCPROJECT");
        assert_eq!(project.values[2], StepValue::String("It's a project".into()));
    }

    #[test]
    fn statements_span_lines_and_keep_quoted_separators() {
        let file = StepFile::parse(SMALL).unwrap();
        let prop = file.get_entity(2).unwrap();
        assert_eq!(prop.values.len(), 4);
        assert_eq!(
            prop.values[2],
            StepValue::Typed {
                type_name: "IFCTEXT".into(),
                value: Box::new(StepValue::String("a;b, (c)".into())),
            }
        );
        assert_eq!(prop.values[2].as_str(), Some("a;b, (c)"));
    }

    #[test]
    fn decodes_unicode_and_reals() {
        let file = StepFile::parse(SMALL).unwrap();
        assert_eq!(file.get_entity(3).unwrap().values[2].as_str(), Some("Café"));
        assert_eq!(file.get_entity(3).unwrap().values[8].as_enum(), Some("SOLIDWALL"));
        assert_eq!(file.get_entity(4).unwrap().values[3], StepValue::Real(200.0));
    }

    #[test]
    fn missing_data_section_is_invalid() {
        let err = StepFile::parse("ISO-10303-21;HEADER;ENDSEC;END-ISO-10303-21;").unwrap_err();
        assert!(matches!(err, ParseError::InvalidStep { .. }));
    }

    #[test]
    fn bad_entity_id_is_invalid() {
        let err = StepFile::parse("DATA;#x1=IFCWALL($);ENDSEC;").unwrap_err();
        assert!(matches!(err, ParseError::InvalidStep { .. }));
    }

    #[test]
    fn serialised_file_parses_back_to_same_records() {
        let file = StepFile::parse(SMALL).unwrap();
        let written = file.to_step_string();
        let reparsed = StepFile::parse(&written).unwrap();

        assert_eq!(reparsed.schema, "IFC4");
        for (id, entity) in &file.entities {
            assert_eq!(reparsed.get_entity(*id).unwrap().values, entity.values);
        }
        assert!(written.contains("#3=IFCWALL('g',$,'Caf\\X2\\00E9\\X0\\',$,$,$,$,$,.SOLIDWALL.);"));
    }

    #[test]
    fn single_literals_parse_like_record_values() {
        assert_eq!(StepValue::parse(" 'Wall' "), StepValue::String("Wall".into()));
        assert_eq!(StepValue::parse("#12"), StepValue::Reference(12));
        assert_eq!(StepValue::parse(".T."), StepValue::Boolean(true));
        assert_eq!(
            StepValue::parse("(#1,#2)"),
            StepValue::List(vec![StepValue::Reference(1), StepValue::Reference(2)])
        );
        assert_eq!(StepValue::parse("Party wall"), StepValue::String("Party wall".into()));
    }

    #[test]
    fn reals_keep_a_decimal_point() {
        assert_eq!(format_real(200.0), "200.0");
        assert_eq!(format_real(1e-7), "1.E-7");
        assert_eq!(format_real(-0.25), "-0.25");
    }
}
