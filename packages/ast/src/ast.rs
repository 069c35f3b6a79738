use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Tag field the parser writes on every polymorphic node
pub const TYPE_TAG: &str = "$type";

/// Root document node
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub head_elements: Vec<Node>,
    #[serde(default)]
    pub body_elements: Vec<Node>,
    #[serde(default)]
    pub script_functions: Vec<ScriptFunction>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a component declaration by name
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|component| component.name == name)
    }
}

/// Reusable component declaration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub body: Vec<Node>,
}

/// Script function declaration (JS target)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptFunction {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub body: Vec<Node>,
}

/// Declared parameter of a component or script function
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::String => f.write_str("string"),
            ParamType::Number => f.write_str("number"),
        }
    }
}

/// Style declaration attached to a styled node
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StyleDeclaration {
    pub property: String,
    pub value: Expression,
}

/// Element node. Head, body and script statements share one closed set;
/// each target decides which variants it emits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "$type")]
pub enum Node {
    /// Document title (head)
    Title { text: Expression },

    /// Favicon (head)
    #[serde(rename_all = "camelCase")]
    Icon { image_path: Expression },

    /// Container
    Div {
        #[serde(default)]
        children: Vec<Node>,
    },

    Paragraph {
        text: Expression,
        #[serde(default)]
        styles: Vec<StyleDeclaration>,
    },

    /// Button with an optional click action naming a script function
    Button {
        text: Expression,
        #[serde(default)]
        action: Option<String>,
        #[serde(default)]
        arguments: Vec<Expression>,
    },

    Link {
        url: Expression,
        #[serde(default)]
        text: Option<Expression>,
    },

    #[serde(rename_all = "camelCase")]
    Textbox {
        name: String,
        #[serde(default)]
        placeholder: Option<Expression>,
        #[serde(default)]
        label: Option<Expression>,
        #[serde(default)]
        label_after: bool,
    },

    Linebreak,

    #[serde(rename_all = "camelCase")]
    Image {
        image_path: Expression,
        #[serde(default)]
        alt_text: Option<String>,
        #[serde(default)]
        styles: Vec<StyleDeclaration>,
    },

    Heading {
        level: u8,
        text: Expression,
        #[serde(default)]
        styles: Vec<StyleDeclaration>,
    },

    /// Component instance
    UseComponent {
        component: String,
        #[serde(default)]
        arguments: Vec<Expression>,
    },

    /// Page header with a single home link
    Topbar {
        value: Expression,
        #[serde(default)]
        fixed: bool,
        #[serde(default)]
        styles: Vec<StyleDeclaration>,
    },

    /// Import of another document. No target emits it yet.
    Import { path: String },

    /// Alert statement (script functions)
    Popup { text: Expression },
}

impl Node {
    /// Variant name as written by the parser
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Title { .. } => "Title",
            Node::Icon { .. } => "Icon",
            Node::Div { .. } => "Div",
            Node::Paragraph { .. } => "Paragraph",
            Node::Button { .. } => "Button",
            Node::Link { .. } => "Link",
            Node::Textbox { .. } => "Textbox",
            Node::Linebreak => "Linebreak",
            Node::Image { .. } => "Image",
            Node::Heading { .. } => "Heading",
            Node::UseComponent { .. } => "UseComponent",
            Node::Topbar { .. } => "Topbar",
            Node::Import { .. } => "Import",
            Node::Popup { .. } => "Popup",
        }
    }
}

/// Expression (text, attribute values, arguments)
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    StringLiteral { value: String },

    NumberLiteral { value: f64 },

    /// Reference to a component parameter
    SymbolReference { symbol: String },

    /// Binary operation (a + b)
    Operation {
        left: Box<Expression>,
        operator: Operator,
        right: Box<Expression>,
    },

    /// Expression tag this crate does not know about
    Unrecognized { kind: String },
}

impl Expression {
    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral {
            value: value.into(),
        }
    }

    pub fn number(value: f64) -> Self {
        Expression::NumberLiteral { value }
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::SymbolReference {
            symbol: name.into(),
        }
    }

    pub fn operation(left: Expression, operator: Operator, right: Expression) -> Self {
        Expression::Operation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Variant name as written by the parser
    pub fn kind(&self) -> &str {
        match self {
            Expression::StringLiteral { .. } => "StringExpression",
            Expression::NumberLiteral { .. } => "NumberExpression",
            Expression::SymbolReference { .. } => "SymbolReference",
            Expression::Operation { .. } => "Operation",
            Expression::Unrecognized { kind } => kind,
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

const KNOWN_EXPRESSIONS: [&str; 4] = [
    "StringExpression",
    "NumberExpression",
    "SymbolReference",
    "Operation",
];

#[derive(Deserialize)]
#[serde(tag = "$type")]
enum KnownExpression {
    StringExpression {
        value: String,
    },
    NumberExpression {
        value: f64,
    },
    SymbolReference {
        symbol: String,
    },
    Operation {
        left: Box<Expression>,
        operator: Operator,
        right: Box<Expression>,
    },
}

impl From<KnownExpression> for Expression {
    fn from(known: KnownExpression) -> Self {
        match known {
            KnownExpression::StringExpression { value } => Expression::StringLiteral { value },
            KnownExpression::NumberExpression { value } => Expression::NumberLiteral { value },
            KnownExpression::SymbolReference { symbol } => Expression::SymbolReference { symbol },
            KnownExpression::Operation {
                left,
                operator,
                right,
            } => Expression::Operation {
                left,
                operator,
                right,
            },
        }
    }
}

// Unknown tags are kept so the evaluator can name them in its error.
impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let kind = raw
            .get(TYPE_TAG)
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| D::Error::missing_field(TYPE_TAG))?;

        if !KNOWN_EXPRESSIONS.contains(&kind.as_str()) {
            return Ok(Expression::Unrecognized { kind });
        }

        KnownExpression::deserialize(raw)
            .map(Expression::from)
            .map_err(D::Error::custom)
    }
}
