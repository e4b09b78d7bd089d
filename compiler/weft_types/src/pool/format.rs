//! Canonical textual form of type nodes.
//!
//! Qualifiers are written postfix (east const), so the text reads inside
//! out the same way the wrappers nest: `Pointer(Const(Base))` is
//! `Base const*`.

use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Pool, TypeData};

impl Pool {
    /// Format a type as a canonical string.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        ensure_sufficient_stack(|| match self.get(idx) {
            TypeData::Primitive(name) | TypeData::Opaque(name) => buf.push_str(name),
            TypeData::Enum(def) => buf.push_str(&def.name),
            TypeData::Struct(def) => buf.push_str(&def.name),
            TypeData::Class(def) => buf.push_str(&def.name),

            TypeData::Const(inner) => {
                self.format_type_into(*inner, buf);
                buf.push_str(" const");
            }
            TypeData::Pointer(inner) => {
                self.format_type_into(*inner, buf);
                buf.push('*');
            }
            TypeData::Ref(inner) => {
                self.format_type_into(*inner, buf);
                buf.push('&');
            }
            TypeData::RvalueRef(inner) => {
                self.format_type_into(*inner, buf);
                buf.push_str("&&");
            }

            TypeData::Function(sig) => {
                buf.push('(');
                for (i, arg) in sig.args.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    buf.push_str(&arg.name);
                    buf.push_str(": ");
                    self.format_type_into(arg.ty, buf);
                }
                buf.push_str(") -> ");
                self.format_type_into(sig.ret, buf);
                if sig.is_const {
                    buf.push_str(" const");
                }
                if sig.is_noexcept {
                    buf.push_str(" noexcept");
                }
            }

            TypeData::TemplateInstance(inst) => {
                buf.push_str(&inst.template);
                buf.push('<');
                for (i, &arg) in inst.args.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.format_type_into(arg, buf);
                }
                buf.push('>');
            }
        });
    }
}
