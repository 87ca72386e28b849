//! A minimal type descriptor with named attributes kept in declaration order.
//! Names starting with `_` are reserved and hidden from `public_attr_names`.

#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Str(&'static str),
    Bool(bool),
}

#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    attrs: Vec<(&'static str, AttrValue)>,
}

impl TypeDescriptor {
    pub fn new(name: &'static str) -> Self {
        Self {
            attrs: vec![
                ("__module__", AttrValue::Str("__main__")),
                ("__qualname__", AttrValue::Str(name)),
                ("__doc__", AttrValue::Str("")),
            ],
        }
    }

    /// Overwrites in place, or appends a new attribute at the end.
    pub fn set_attr(&mut self, name: &'static str, value: AttrValue) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn public_attr_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attrs
            .iter()
            .map(|&(name, _)| name)
            .filter(|name| !name.starts_with('_'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names_are_hidden() {
        let desc = TypeDescriptor::new("Empty");
        assert_eq!(desc.public_attr_names().count(), 0);
        assert_eq!(desc.attr("__qualname__"), Some(&AttrValue::Str("Empty")));
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut desc = TypeDescriptor::new("T");
        desc.set_attr("a", AttrValue::Bool(true));
        desc.set_attr("b", AttrValue::Bool(true));
        desc.set_attr("a", AttrValue::Bool(false));
        desc.set_attr("_hidden", AttrValue::Bool(true));

        assert_eq!(desc.public_attr_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(desc.attr("a"), Some(&AttrValue::Bool(false)));
        assert_eq!(desc.attr("missing"), None);
    }
}
