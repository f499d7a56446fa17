//! Declared type model
//!
//! Class diagrams are built from metadata a type declares about itself
//! rather than from runtime reflection. A [`ClassType`] lists the members a
//! type declares (not inherited ones), its bases, and its constructor
//! parameters. Descriptors are immutable once built and shared through
//! [`Arc`], so one base can be referenced by many subclasses.
//!
//! ```rust
//! use lineage::plugins::class::{ClassType, TypeRef};
//!
//! let base = ClassType::builder("Base")
//!     .abstract_method("run", &["self"], "None")
//!     .build();
//! let leaf = ClassType::builder("Leaf")
//!     .extends(base)
//!     .field("count", "int")
//!     .param("count", TypeRef::named("int"))
//!     .build();
//!
//! assert_eq!(leaf.primary_base().unwrap().name(), "Base");
//! ```

use std::sync::Arc;

/// Name of the universal root type every hierarchy ends in
pub const ROOT_TYPE_NAME: &str = "object";

/// Built-in primitive type names; parameters of these types are never
/// treated as composed parts
pub const BUILTIN_TYPES: &[&str] = &[
    "bool",
    "bytearray",
    "bytes",
    "complex",
    "dict",
    "float",
    "frozenset",
    "int",
    "list",
    "memoryview",
    "None",
    "NoneType",
    "object",
    "range",
    "set",
    "slice",
    "str",
    "tuple",
    "type",
];

/// Returns true if `name` is a built-in primitive type
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

/// A type annotation on a constructor parameter
#[derive(Debug, Clone)]
pub enum TypeRef {
    /// Built-in primitive type
    Builtin(String),
    /// Declared class with its own descriptor
    Class(Arc<ClassType>),
    /// Name that could not be resolved to a descriptor
    Unresolved(String),
}

impl TypeRef {
    /// Classify a bare type name: builtin if it is one, unresolved otherwise
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if is_builtin(&name) {
            TypeRef::Builtin(name)
        } else {
            TypeRef::Unresolved(name)
        }
    }

    pub fn class(ty: impl Into<Arc<ClassType>>) -> Self {
        TypeRef::Class(ty.into())
    }

    /// Reference a type that describes itself
    pub fn of<T: Describe>() -> Self {
        TypeRef::Class(Arc::new(T::describe()))
    }

    pub fn name(&self) -> &str {
        match self {
            TypeRef::Builtin(name) | TypeRef::Unresolved(name) => name,
            TypeRef::Class(ty) => ty.name(),
        }
    }

    pub fn as_class(&self) -> Option<&Arc<ClassType>> {
        match self {
            TypeRef::Class(ty) => Some(ty),
            _ => None,
        }
    }
}

/// A type-annotated field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub type_name: String,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A constructor parameter
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub annotation: Option<TypeRef>,
}

/// A member a type declares itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// Instance or class method; `params` may include the receiver
    Method {
        name: String,
        params: Vec<String>,
        returns: String,
        is_abstract: bool,
    },
    /// Static method
    StaticMethod {
        name: String,
        params: Vec<String>,
        returns: String,
        is_abstract: bool,
    },
    /// Computed accessor
    Property {
        name: String,
        returns: Option<String>,
    },
    /// The type's own field annotations, in declaration order
    Fields(Vec<Field>),
    /// Anything else a type carries (nested types, plain values)
    Other { name: String },
}

/// Descriptor of a declared type
#[derive(Debug, Clone)]
pub struct ClassType {
    name: String,
    bases: Vec<Arc<ClassType>>,
    members: Vec<Member>,
    constructor: Vec<Param>,
}

impl ClassType {
    pub fn builder(name: impl Into<String>) -> ClassTypeBuilder {
        ClassTypeBuilder {
            ty: ClassType {
                name: name.into(),
                bases: Vec::new(),
                members: Vec::new(),
                constructor: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared bases; the first one is the primary base
    pub fn bases(&self) -> &[Arc<ClassType>] {
        &self.bases
    }

    /// The base followed when walking the ancestry
    pub fn primary_base(&self) -> Option<&Arc<ClassType>> {
        self.bases.first()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn constructor(&self) -> &[Param] {
        &self.constructor
    }

    pub fn is_root(&self) -> bool {
        self.name == ROOT_TYPE_NAME && self.bases.is_empty()
    }
}

/// Builder for [`ClassType`]
#[derive(Debug, Clone)]
pub struct ClassTypeBuilder {
    ty: ClassType,
}

impl ClassTypeBuilder {
    /// Add a base; the first base added is the primary one
    pub fn extends(mut self, base: impl Into<Arc<ClassType>>) -> Self {
        self.ty.bases.push(base.into());
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.ty.members.push(member);
        self
    }

    pub fn method(self, name: impl Into<String>, params: &[&str], returns: impl Into<String>) -> Self {
        self.member(Member::Method {
            name: name.into(),
            params: to_strings(params),
            returns: returns.into(),
            is_abstract: false,
        })
    }

    pub fn abstract_method(
        self,
        name: impl Into<String>,
        params: &[&str],
        returns: impl Into<String>,
    ) -> Self {
        self.member(Member::Method {
            name: name.into(),
            params: to_strings(params),
            returns: returns.into(),
            is_abstract: true,
        })
    }

    pub fn static_method(
        self,
        name: impl Into<String>,
        params: &[&str],
        returns: impl Into<String>,
    ) -> Self {
        self.member(Member::StaticMethod {
            name: name.into(),
            params: to_strings(params),
            returns: returns.into(),
            is_abstract: false,
        })
    }

    pub fn property(self, name: impl Into<String>, returns: impl Into<String>) -> Self {
        self.member(Member::Property {
            name: name.into(),
            returns: Some(returns.into()),
        })
    }

    /// Add a field annotation to the type's field map
    pub fn field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        let field = Field::new(name, type_name);
        let existing = self.ty.members.iter_mut().find_map(|m| match m {
            Member::Fields(fields) => Some(fields),
            _ => None,
        });
        match existing {
            Some(fields) => fields.push(field),
            None => self.ty.members.push(Member::Fields(vec![field])),
        }
        self
    }

    /// Add an annotated constructor parameter
    pub fn param(mut self, name: impl Into<String>, annotation: TypeRef) -> Self {
        self.ty.constructor.push(Param {
            name: name.into(),
            annotation: Some(annotation),
        });
        self
    }

    /// Add a constructor parameter without an annotation
    pub fn untyped_param(mut self, name: impl Into<String>) -> Self {
        self.ty.constructor.push(Param {
            name: name.into(),
            annotation: None,
        });
        self
    }

    pub fn build(self) -> ClassType {
        self.ty
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Types that declare their own diagram metadata
///
/// ```rust
/// use lineage::plugins::class::{ClassType, Describe};
///
/// struct Engine;
///
/// impl Describe for Engine {
///     fn describe() -> ClassType {
///         ClassType::builder("Engine")
///             .method("start", &["self"], "None")
///             .build()
///     }
/// }
///
/// assert_eq!(Engine::describe().name(), "Engine");
/// ```
pub trait Describe {
    fn describe() -> ClassType;
}
