/// External (serializable) representations of the shapes and manifests within the library.
pub mod ext_repr;

/// All logic for converting external representations into validated shapes
pub mod import;

/// All logic for exporting collision results into external representations
pub mod export;
