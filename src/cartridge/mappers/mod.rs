// Mapper factory - dispatches on the iNES mapper number.

mod mapper0;

use super::{Cartridge, CartridgeError, Mapper};
use mapper0::Mapper0;

/// Build the mapper implementation named by `cartridge.mapper_id`.
///
/// Only mapper 0 (NROM) is implemented; any other id is rejected with
/// `CartridgeError::UnsupportedMapper` rather than silently falling
/// back to NROM behavior. Extending this factory with another mapper
/// requires only a trait impl and one more match arm here.
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, CartridgeError> {
    match cartridge.mapper_id {
        0 => Ok(Box::new(Mapper0::new(cartridge)?)),
        id => Err(CartridgeError::UnsupportedMapper(id)),
    }
}
