/// Conversion of packings into their external representation
pub mod export;

/// External representations of packings, used for serialization
pub mod ext_repr;

/// Tabular `id,x,y,deg` representation of a packing
pub mod csv;
