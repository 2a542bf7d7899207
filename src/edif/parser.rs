//! Parser for EDIF netlists.
//!
//! The parser pulls one token at a time from its [`Lexer`] and keeps an
//! explicit stack of open forms, so nesting depth is bounded only by
//! memory. Each form is checked against a table of the child keywords its
//! head admits. Visitor calls are made as forms open and close; nothing
//! outlives the form it was read from.

use super::keywords::{CellType, Direction, Keyword, ViewType};
use super::lexer::{Lexer, Token, TokenKind};
use super::types::*;
use super::visitor::EdifVisitor;
use crate::error::{EdifError, Result};

/// Parser for EDIF netlists.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    stack: Vec<Frame>,
    debug_level: u32,
}

/// What an open form is.
#[derive(Debug)]
enum Form {
    /// A construct with modelled structure
    Construct(Keyword),
    /// Any balanced content, reported to nobody; holds the head word
    Opaque(String),
}

/// One open form on the parse stack.
#[derive(Debug)]
struct Frame {
    form: Form,
    line: usize,
    column: usize,
    /// Resolved name; taken by the visitor for constructs reported on entry
    name: Option<Name>,
    named: bool,
    items: Vec<Item>,
}

impl Frame {
    fn new(form: Form, head: &Token) -> Self {
        Self {
            form,
            line: head.line,
            column: head.column,
            name: None,
            named: false,
            items: Vec::new(),
        }
    }

    fn head(&self) -> &str {
        match &self.form {
            Form::Construct(kw) => kw.as_str(),
            Form::Opaque(text) => text,
        }
    }
}

/// A name, possibly renamed, arrayed or indexed.
#[derive(Debug, Default)]
struct Name {
    id: String,
    original: Option<String>,
    width: Option<u32>,
    member: Vec<i64>,
}

impl Name {
    fn new(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// An argument collected by an open form.
#[derive(Debug)]
enum Item {
    Integer(i64),
    Str(String),
    CellType(CellType),
    ViewType(ViewType),
    Direction(Direction),
    Bool(bool),
    Scaled(ScaledInteger),
    Value(PropertyValue),
    Owner(String),
    CellRef(CellRef),
    ViewRef(ViewRef),
    LibraryRef(String),
    InstanceRef(String, Vec<i64>),
    PortRef(PortRef),
    Joined(Vec<PortRef>),
    /// A property followed by the properties nested in it
    Properties(Vec<Property>),
}

/// What a closed form hands to its parent.
enum Completed {
    Nothing,
    Name(Name),
    Item(Item),
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            stack: Vec::new(),
            debug_level: 0,
        }
    }

    /// Verbosity of grammar tracing: 0 silent, 1 logs each construct
    /// opening and closing, 2 also logs each token.
    pub fn set_debug_level(&mut self, level: u32) {
        self.debug_level = level;
    }

    pub fn debug_level(&self) -> u32 {
        self.debug_level
    }

    pub fn lexer(&self) -> &Lexer<'a> {
        &self.lexer
    }

    pub fn lexer_mut(&mut self) -> &mut Lexer<'a> {
        &mut self.lexer
    }

    /// Parse one `(edif ...)` document from the bound stream, reporting its
    /// constructs to `visitor`.
    ///
    /// Stops at the first error; the parser is left ready for the next
    /// stream either way.
    pub fn parse<V: EdifVisitor + ?Sized>(&mut self, visitor: &mut V) -> Result<()> {
        self.stack.clear();
        let result = self.parse_document(visitor);
        self.stack.clear();
        result
    }

    fn parse_document<V: EdifVisitor + ?Sized>(&mut self, visitor: &mut V) -> Result<()> {
        let open = self.next_token()?;
        if open.kind != TokenKind::OpenParen {
            return Err(unexpected(&open, "`(edif`"));
        }
        let head = self.next_token()?;
        if head.kind != TokenKind::Keyword(Keyword::Edif) {
            return Err(unexpected(&head, "keyword `edif`"));
        }
        self.push(Frame::new(Form::Construct(Keyword::Edif), &head));

        while !self.stack.is_empty() {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::OpenParen => self.open_form(&token, visitor)?,
                TokenKind::CloseParen => self.close_form(&token, visitor)?,
                TokenKind::Eof => return Err(self.unclosed(&token)),
                _ => self.accept_atom(token, visitor)?,
            }
        }

        let trailing = self.next_token()?;
        if !trailing.is_eof() {
            return Err(unexpected(&trailing, "end of file after `edif`"));
        }
        Ok(())
    }

    fn next_token(&mut self) -> Result<Token> {
        let token = self.lexer.get_token()?;
        if self.debug_level >= 2 {
            log::trace!("token {}:{} {} {:?}", token.line, token.column, token.name(), token.text);
        }
        if token.kind == TokenKind::Invalid {
            return Err(EdifError::lexer(
                token.line,
                token.column,
                format!("invalid token `{}`", token.text),
            ));
        }
        Ok(token)
    }

    fn push(&mut self, frame: Frame) {
        if self.debug_level >= 1 {
            log::debug!(
                "{:indent$}open `{}` at {}:{}",
                "",
                frame.head(),
                frame.line,
                frame.column,
                indent = self.stack.len() * 2
            );
        }
        self.stack.push(frame);
    }

    fn open_form<V: EdifVisitor + ?Sized>(&mut self, open: &Token, visitor: &mut V) -> Result<()> {
        let head = self.next_token()?;
        let (parent, named) = match self.stack.last() {
            Some(Frame {
                form: Form::Construct(kw),
                named,
                ..
            }) => (*kw, *named),
            Some(Frame {
                form: Form::Opaque(_), ..
            }) => {
                // Anything goes inside an opaque form, including words
                // that are not in the keyword table.
                if !matches!(head.kind, TokenKind::Keyword(_) | TokenKind::Identifier) {
                    return Err(unexpected(&head, "a keyword"));
                }
                self.push(Frame::new(Form::Opaque(head.text.clone()), &head));
                return Ok(());
            }
            None => return Err(unexpected(open, "end of file")),
        };

        let keyword = match head.kind {
            TokenKind::Keyword(kw) => kw,
            _ => return Err(unexpected(&head, "a keyword")),
        };

        match name_forms(parent) {
            Some(forms) if !named => {
                if !forms.contains(&keyword) {
                    return Err(unexpected(&head, format!("name of `{}`", parent)));
                }
            }
            _ => {
                if !children(parent).contains(&keyword) {
                    return Err(unexpected(&head, expected_inside(parent)));
                }
            }
        }

        let form = if is_opaque(keyword) {
            Form::Opaque(keyword.as_str().to_string())
        } else {
            Form::Construct(keyword)
        };
        self.push(Frame::new(form, &head));

        match keyword {
            Keyword::Interface => visitor.visit_interface(),
            Keyword::Contents => visitor.visit_contents(),
            _ => {}
        }
        Ok(())
    }

    fn accept_atom<V: EdifVisitor + ?Sized>(&mut self, token: Token, visitor: &mut V) -> Result<()> {
        let Some(frame) = self.stack.last_mut() else {
            return Err(unexpected(&token, "end of file"));
        };
        let keyword = match frame.form {
            Form::Construct(kw) => kw,
            Form::Opaque(_) => return Ok(()),
        };

        if name_forms(keyword).is_some() && !frame.named {
            if token.kind != TokenKind::Identifier {
                return Err(unexpected(&token, format!("name of `{}`", keyword)));
            }
            frame.name = Some(Name::new(token.text));
            frame.named = true;
            self.entered(visitor);
            return Ok(());
        }

        let item = match (keyword, &token.kind) {
            (
                Keyword::EdifVersion
                | Keyword::EdifLevel
                | Keyword::Integer
                | Keyword::Number
                | Keyword::E
                | Keyword::Array
                | Keyword::Member,
                TokenKind::Integer(v),
            ) => Item::Integer(*v),
            (Keyword::String | Keyword::Comment | Keyword::Rename | Keyword::Owner, TokenKind::String) => {
                Item::Str(token.text.clone())
            }
            (Keyword::CellType, TokenKind::CellType(v)) => Item::CellType(*v),
            (Keyword::ViewType, TokenKind::ViewType(v)) => Item::ViewType(*v),
            (Keyword::Direction, TokenKind::Direction(v)) => Item::Direction(*v),
            (Keyword::CellType | Keyword::ViewType | Keyword::Direction, TokenKind::Identifier) => {
                let table = keyword.value_table().map(|t| t.expected()).unwrap_or_default();
                return Err(EdifError::semantic(
                    token.line,
                    token.column,
                    format!("unknown {} `{}`, expected one of {}", keyword, token.text, table),
                ));
            }
            _ => return Err(unexpected(&token, expected_inside(keyword))),
        };
        self.push_item(item, &token)
    }

    /// Add an argument to the innermost form, enforcing its arity.
    fn push_item(&mut self, item: Item, at: &Token) -> Result<()> {
        let Some(frame) = self.stack.last_mut() else {
            return Ok(());
        };
        if let Form::Construct(kw) = frame.form {
            if let Some((_, Some(max))) = arity(kw) {
                if frame.items.len() >= max {
                    return Err(EdifError::syntax(
                        at.line,
                        at.column,
                        format!("`)` closing `{}`", kw),
                        at.describe(),
                    ));
                }
            }
        }
        frame.items.push(item);
        Ok(())
    }

    fn close_form<V: EdifVisitor + ?Sized>(&mut self, close: &Token, visitor: &mut V) -> Result<()> {
        let Some(frame) = self.stack.pop() else {
            return Err(unexpected(close, "end of file"));
        };
        if self.debug_level >= 1 {
            log::debug!(
                "{:indent$}close `{}` at {}:{}",
                "",
                frame.head(),
                close.line,
                close.column,
                indent = self.stack.len() * 2
            );
        }

        match finish(frame, close, visitor)? {
            Completed::Nothing => Ok(()),
            Completed::Item(Item::Properties(properties)) if !self.owner_reports_on_close() => {
                for property in properties {
                    visitor.visit_property(property);
                }
                Ok(())
            }
            Completed::Item(item) => self.push_item(item, close),
            Completed::Name(name) => {
                if let Some(parent) = self.stack.last_mut() {
                    parent.name = Some(name);
                    parent.named = true;
                }
                self.entered(visitor);
                Ok(())
            }
        }
    }

    /// The innermost form just resolved its name: report the constructs
    /// whose children follow.
    fn entered<V: EdifVisitor + ?Sized>(&mut self, visitor: &mut V) {
        let Some(frame) = self.stack.last_mut() else {
            return;
        };
        let keyword = match frame.form {
            Form::Construct(
                kw @ (Keyword::Edif | Keyword::Library | Keyword::External | Keyword::Cell | Keyword::View),
            ) => kw,
            _ => return,
        };
        let name = frame.name.take().unwrap_or_default().id;
        if self.debug_level >= 1 {
            log::debug!("enter {} `{}`", keyword, name);
        }
        match keyword {
            Keyword::Edif => visitor.visit_edif(name),
            Keyword::Library => visitor.visit_library(name, false),
            Keyword::External => visitor.visit_library(name, true),
            Keyword::Cell => visitor.visit_module(name),
            Keyword::View => visitor.visit_view(name),
            _ => {}
        }
    }

    /// Whether the innermost open form is reported when it closes, so that
    /// its properties have to wait for it.
    fn owner_reports_on_close(&self) -> bool {
        matches!(
            self.stack.last(),
            Some(Frame {
                form: Form::Construct(kw),
                ..
            }) if reports_on_close(*kw)
        )
    }

    fn unclosed(&self, eof: &Token) -> EdifError {
        match self.stack.last() {
            Some(frame) => EdifError::syntax(
                eof.line,
                eof.column,
                format!("`)` closing `{}` opened at {}:{}", frame.head(), frame.line, frame.column),
                eof.describe(),
            ),
            None => unexpected(eof, "`)`"),
        }
    }
}

/// Build the value a closed form hands to its parent, reporting it to the
/// visitor where it is a construct of its own.
fn finish<V: EdifVisitor + ?Sized>(frame: Frame, close: &Token, visitor: &mut V) -> Result<Completed> {
    let keyword = match frame.form {
        Form::Construct(kw) => kw,
        Form::Opaque(_) => return Ok(Completed::Nothing),
    };

    if name_forms(keyword).is_some() && !frame.named {
        return Err(unexpected(close, format!("name of `{}`", keyword)));
    }
    if let Some((min, _)) = arity(keyword) {
        if frame.items.len() < min {
            return Err(unexpected(
                close,
                format!("{} in `{}`", argument_description(keyword), keyword),
            ));
        }
    }

    let name = frame.name.unwrap_or_default();
    let mut items = frame.items;
    let properties = take_properties(&mut items);

    let completed = match keyword {
        Keyword::Edif => {
            visitor.end_edif();
            Completed::Nothing
        }
        Keyword::Library | Keyword::External => {
            visitor.end_library();
            Completed::Nothing
        }
        Keyword::Cell => {
            visitor.end_module();
            Completed::Nothing
        }
        Keyword::View => {
            visitor.end_view();
            Completed::Nothing
        }
        Keyword::Interface => {
            visitor.end_interface();
            Completed::Nothing
        }
        Keyword::Contents => {
            visitor.end_contents();
            Completed::Nothing
        }
        Keyword::EdifVersion => {
            if let [Item::Integer(major), Item::Integer(minor), Item::Integer(patch)] = items.as_slice() {
                visitor.visit_edif_version(*major, *minor, *patch);
            }
            Completed::Nothing
        }
        Keyword::EdifLevel => {
            if let [Item::Integer(level)] = items.as_slice() {
                visitor.visit_edif_level(*level);
            }
            Completed::Nothing
        }
        Keyword::CellType => {
            if let [Item::CellType(cell_type)] = items.as_slice() {
                visitor.visit_cell_type(*cell_type);
            }
            Completed::Nothing
        }
        Keyword::ViewType => {
            if let [Item::ViewType(view_type)] = items.as_slice() {
                visitor.visit_view_type(*view_type);
            }
            Completed::Nothing
        }
        Keyword::Direction => match items.into_iter().next() {
            Some(item) => Completed::Item(item),
            None => Completed::Nothing,
        },
        Keyword::Port => {
            let direction = items.iter().rev().find_map(|item| match item {
                Item::Direction(d) => Some(*d),
                _ => None,
            });
            visitor.visit_port(Port {
                name: name.id,
                original_name: name.original,
                width: name.width,
                direction,
            });
            properties.into_iter().for_each(|p| visitor.visit_property(p));
            Completed::Nothing
        }
        Keyword::Instance => {
            let mut view_ref = None;
            let mut cell_ref = None;
            for item in items {
                match item {
                    Item::ViewRef(v) => view_ref = Some(v),
                    Item::CellRef(c) => cell_ref = Some(c),
                    _ => {}
                }
            }
            if view_ref.is_none() && cell_ref.is_none() {
                return Err(unexpected(close, "`viewref` or `cellref` in `instance`"));
            }
            visitor.visit_instance(Instance {
                name: name.id,
                original_name: name.original,
                width: name.width,
                view_ref,
                cell_ref,
            });
            properties.into_iter().for_each(|p| visitor.visit_property(p));
            Completed::Nothing
        }
        Keyword::Net => {
            let joined = items
                .into_iter()
                .flat_map(|item| match item {
                    Item::Joined(refs) => refs,
                    _ => Vec::new(),
                })
                .collect();
            visitor.visit_net(Net {
                name: name.id,
                original_name: name.original,
                width: name.width,
                joined,
            });
            properties.into_iter().for_each(|p| visitor.visit_property(p));
            Completed::Nothing
        }
        Keyword::Joined => {
            let refs = items
                .into_iter()
                .filter_map(|item| match item {
                    Item::PortRef(r) => Some(r),
                    _ => None,
                })
                .collect();
            Completed::Item(Item::Joined(refs))
        }
        Keyword::PortRef => {
            let (instance, instance_member) = items
                .into_iter()
                .find_map(|item| match item {
                    Item::InstanceRef(id, member) => Some((Some(id), member)),
                    _ => None,
                })
                .unwrap_or_default();
            Completed::Item(Item::PortRef(PortRef {
                port: name.id,
                member: name.member,
                instance,
                instance_member,
            }))
        }
        Keyword::InstanceRef => Completed::Item(Item::InstanceRef(name.id, name.member)),
        Keyword::LibraryRef => Completed::Item(Item::LibraryRef(name.id)),
        Keyword::CellRef => {
            let library = items.into_iter().find_map(|item| match item {
                Item::LibraryRef(l) => Some(l),
                _ => None,
            });
            Completed::Item(Item::CellRef(CellRef { name: name.id, library }))
        }
        Keyword::ViewRef => {
            let cell = items.into_iter().find_map(|item| match item {
                Item::CellRef(c) => Some(c),
                _ => None,
            });
            Completed::Item(Item::ViewRef(ViewRef { name: name.id, cell }))
        }
        Keyword::Design => {
            let cell_ref = items.into_iter().find_map(|item| match item {
                Item::CellRef(c) => Some(c),
                _ => None,
            });
            visitor.visit_design(Design { name: name.id, cell_ref });
            properties.into_iter().for_each(|p| visitor.visit_property(p));
            Completed::Nothing
        }
        Keyword::Property => {
            let mut value = None;
            let mut owner = None;
            for item in items {
                match item {
                    Item::Value(v) if value.is_none() => value = Some(v),
                    Item::Owner(o) => owner = Some(o),
                    _ => {}
                }
            }
            let property = Property {
                name: name.id,
                original_name: name.original,
                value,
                owner,
            };
            let mut all = Vec::with_capacity(properties.len() + 1);
            all.push(property);
            all.extend(properties);
            Completed::Item(Item::Properties(all))
        }
        Keyword::Integer => match items.first() {
            Some(Item::Integer(v)) => Completed::Item(Item::Value(PropertyValue::Integer(*v))),
            _ => Completed::Nothing,
        },
        Keyword::String => match items.into_iter().next() {
            Some(Item::Str(s)) => Completed::Item(Item::Value(PropertyValue::String(s))),
            _ => Completed::Nothing,
        },
        Keyword::Boolean => match items.first() {
            Some(Item::Bool(b)) => Completed::Item(Item::Value(PropertyValue::Boolean(*b))),
            _ => Completed::Nothing,
        },
        Keyword::Number => match items.first() {
            Some(Item::Integer(v)) => {
                Completed::Item(Item::Value(PropertyValue::Number(ScaledInteger::from(*v))))
            }
            Some(Item::Scaled(n)) => Completed::Item(Item::Value(PropertyValue::Number(*n))),
            _ => Completed::Nothing,
        },
        Keyword::E => match items.as_slice() {
            [Item::Integer(mantissa), Item::Integer(exponent)] => Completed::Item(Item::Scaled(ScaledInteger {
                mantissa: *mantissa,
                exponent: *exponent,
            })),
            _ => Completed::Nothing,
        },
        Keyword::True => Completed::Item(Item::Bool(true)),
        Keyword::False => Completed::Item(Item::Bool(false)),
        Keyword::Owner => match items.into_iter().next() {
            Some(Item::Str(s)) => Completed::Item(Item::Owner(s)),
            _ => Completed::Nothing,
        },
        Keyword::Comment => {
            for item in items {
                if let Item::Str(text) = item {
                    visitor.visit_comment(text);
                }
            }
            Completed::Nothing
        }
        Keyword::Rename => {
            let original = items.into_iter().find_map(|item| match item {
                Item::Str(s) => Some(s),
                _ => None,
            });
            Completed::Name(Name {
                original,
                ..Name::new(name.id)
            })
        }
        Keyword::Name => Completed::Name(Name::new(name.id)),
        Keyword::Array => {
            let size = match items.first() {
                Some(Item::Integer(v)) => *v,
                _ => 0,
            };
            let width = u32::try_from(size)
                .ok()
                .filter(|w| *w > 0)
                .ok_or_else(|| {
                    EdifError::semantic(
                        frame.line,
                        frame.column,
                        format!("array `{}` has invalid size {}", name.id, size),
                    )
                })?;
            Completed::Name(Name {
                width: Some(width),
                ..name
            })
        }
        Keyword::Member => {
            let member = items
                .iter()
                .filter_map(|item| match item {
                    Item::Integer(v) => Some(*v),
                    _ => None,
                })
                .collect();
            Completed::Name(Name { member, ..name })
        }
        _ => Completed::Nothing,
    };
    Ok(completed)
}

/// Remove the properties collected by a form, in document order.
fn take_properties(items: &mut Vec<Item>) -> Vec<Property> {
    let mut properties = Vec::new();
    items.retain_mut(|item| match item {
        Item::Properties(list) => {
            properties.append(list);
            false
        }
        _ => true,
    });
    properties
}

/// Constructs reported at their closing parenthesis.
fn reports_on_close(keyword: Keyword) -> bool {
    matches!(
        keyword,
        Keyword::Port | Keyword::Instance | Keyword::Net | Keyword::Design | Keyword::Property
    )
}

fn unexpected(token: &Token, expected: impl Into<String>) -> EdifError {
    EdifError::syntax(token.line, token.column, expected, token.describe())
}

/// Forms whose inner structure is not modelled; their content is skipped.
fn is_opaque(keyword: Keyword) -> bool {
    use Keyword::*;
    matches!(
        keyword,
        Status
            | Written
            | Timestamp
            | Program
            | Version
            | Author
            | Technology
            | NumberDefinition
            | KeywordMap
            | KeywordLevel
            | UserData
            | PortBundle
            | NetBundle
            | ListOfPorts
            | ListOfNets
            | PortList
            | GlobalPortRef
            | PortInstance
            | Unit
            | Display
            | Designator
    )
}

/// For named forms, the forms that may stand in for a plain identifier
/// name. `None` for forms that take no name.
fn name_forms(keyword: Keyword) -> Option<&'static [Keyword]> {
    use Keyword::*;
    match keyword {
        Edif | Library | External | Cell | View | Design | Property | CellRef | ViewRef | LibraryRef | Array => {
            Some(&[Rename, Name])
        }
        Port | Instance | Net => Some(&[Rename, Name, Array]),
        PortRef | InstanceRef => Some(&[Rename, Name, Member]),
        Member => Some(&[Rename, Name]),
        Rename => Some(&[Name]),
        Name => Some(&[]),
        _ => None,
    }
}

/// Child constructs a form admits once its name, if any, is resolved.
fn children(keyword: Keyword) -> &'static [Keyword] {
    use Keyword::*;
    match keyword {
        Edif => &[EdifVersion, EdifLevel, KeywordMap, Status, External, Library, Design, Comment, UserData],
        Library | External => &[EdifLevel, Technology, Status, Cell, Comment, UserData],
        Cell => &[CellType, Status, View, Property, Comment, UserData],
        View => &[ViewType, Interface, Status, Contents, Property, Comment, UserData],
        Interface => &[Port, PortBundle, Property, Designator, Comment, UserData],
        Port => &[Direction, Property, Designator, Comment, UserData],
        Contents => &[Instance, Net, NetBundle, Comment, UserData],
        Instance => &[ViewRef, CellRef, Property, PortInstance, Designator, Comment, UserData],
        Net => &[Joined, Property, Comment, UserData],
        Joined => &[PortRef, PortList, GlobalPortRef],
        PortRef => &[InstanceRef, ViewRef],
        InstanceRef => &[ViewRef],
        ViewRef => &[CellRef],
        CellRef => &[LibraryRef],
        Design => &[CellRef, Status, Property, Comment, UserData],
        Property => &[Integer, String, Boolean, Number, Owner, Unit, Comment, Property],
        Boolean => &[True, False],
        Number => &[E],
        Name => &[Display],
        _ => &[],
    }
}

/// Minimum and maximum argument counts for leaf forms.
fn arity(keyword: Keyword) -> Option<(usize, Option<usize>)> {
    use Keyword::*;
    match keyword {
        EdifVersion => Some((3, Some(3))),
        EdifLevel | CellType | ViewType | Direction | Rename | Owner | Boolean => Some((1, Some(1))),
        E => Some((2, Some(2))),
        Array | Member | Integer | String | Number => Some((1, None)),
        _ => None,
    }
}

fn argument_description(keyword: Keyword) -> String {
    use Keyword::*;
    match keyword {
        EdifVersion => "three integers".to_string(),
        E => "mantissa and exponent".to_string(),
        Boolean => "`(true)` or `(false)`".to_string(),
        Rename | Owner | String => "a string".to_string(),
        Array => "an array size".to_string(),
        Member => "a member index".to_string(),
        Number => "a number".to_string(),
        CellType | ViewType | Direction => {
            let values = keyword.value_table().map(|t| t.expected()).unwrap_or_default();
            format!("one of {}", values)
        }
        _ => "an integer".to_string(),
    }
}

fn expected_inside(keyword: Keyword) -> String {
    let allowed = children(keyword);
    if allowed.is_empty() {
        return format!("`)` closing `{}`", keyword);
    }
    let names: Vec<&str> = allowed.iter().map(|kw| kw.as_str()).collect();
    format!("one of ({}) in `{}`", names.join(", "), keyword)
}
