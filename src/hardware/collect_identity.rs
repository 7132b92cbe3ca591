use crate::bmc::RawFru;
use crate::hardware::collector::InventoryError;
use crate::hardware::types::{Common, Device, Enclosure, Mainboard};

/// Populate system, board and chassis identity from the controller's FRU data.
///
/// Board identity is authoritative for the whole device. Exactly one FRU
/// record is expected; anything else is a data-integrity failure.
pub fn collect_identity(device: &mut Device, frus: Vec<RawFru>) -> Result<(), InventoryError> {
    let count = frus.len();
    let fru = match <[RawFru; 1]>::try_from(frus) {
        Ok([fru]) => fru,
        Err(_) => return Err(InventoryError::FruCount(count)),
    };

    // system
    device.model = fru.board.product_name.clone();
    device.vendor = fru.board.manufacturer.clone();
    device.serial = fru.board.serial_number.clone();

    // board
    device.mainboard = Mainboard {
        common: Common {
            vendor: fru.board.manufacturer,
            model: fru.board.product_name,
            serial: fru.board.serial_number,
            ..Default::default()
        },
    };

    // chassis
    device.enclosures.push(Enclosure {
        common: Common {
            description: fru.chassis.chassis_type,
            model: fru.chassis.model_extra,
            serial: fru.chassis.serial_number,
            product_name: fru.chassis.part_number,
            ..Default::default()
        },
    });

    // product data is kept verbatim, placeholders included
    device.insert_metadata("product.manufacturer", &fru.product.manufacturer);
    device.insert_metadata("product.name", &fru.product.product_name);
    device.insert_metadata("product.part_number", &fru.product.part_number);
    device.insert_metadata("product.version", &fru.product.product_version);
    device.insert_metadata("product.serialnumber", &fru.product.serial_number);

    Ok(())
}
