pub mod serialize;
pub mod value;

pub use self::serialize::{to_json, to_json_pretty, to_json_value, DISCRIMINATOR};
pub use self::value::{
    Argument, CompiledExpression, DictKey, Expression, IrValue, Mutation, Path, PathSegment, StringLiteral,
};
