use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{display_value, parse_float, parse_int};

/* -------------------------------------------------------------------------- */
/*                                 structures                                 */
/* -------------------------------------------------------------------------- */

/// Typed van attributes, body of `POST /api/vans`. Numeric fields that did
/// not parse stay `None` and go out as `null`.
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct VanDetails {
    pub mv_file_no: String,
    pub plate_number: String,
    pub engine_no: String,
    pub chassis_no: String,
    pub denomination: String,
    pub piston_displacement: String,
    pub number_of_cylinders: Option<i64>,
    pub fuel: String,
    pub make: String,
    pub series: String,
    pub body_type: String,
    pub body_no: String,
    pub year_model: Option<i64>,
    pub gross_weight: Option<f64>,
    pub net_weight: Option<f64>,
    pub shipping_weight: Option<f64>,
    pub net_capacity: Option<f64>,
    pub year_last_registered: Option<i64>,
    pub expiration_date: String,
}

/// A van exactly as `GET /api/vans` returned it. The view modal renders the
/// record key by key and `PUT /api/vans/{id}` sends it back untouched, so
/// nothing here is typed beyond the identifier.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Van {
    pub id: i64,
    record: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Van {
    type Error = String;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = record
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| "van record without an integer id".to_string())?;
        Ok(Self { id, record })
    }
}

impl From<Van> for Map<String, Value> {
    fn from(van: Van) -> Self {
        van.record
    }
}

impl Van {
    /// Every attribute the backend sent, in its order.
    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }

    /// Display text of one attribute; missing and `null` read as "".
    pub fn text(&self, field: VanField) -> String {
        self.record.get(field.key()).map(display_value).unwrap_or_default()
    }
}

/* -------------------------------------------------------------------------- */
/*                          form layout (field table)                         */
/* -------------------------------------------------------------------------- */

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VanFieldKind {
    Text,
    Integer,
    Float,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VanField {
    MvFileNo,
    PlateNumber,
    EngineNo,
    ChassisNo,
    Denomination,
    PistonDisplacement,
    NumberOfCylinders,
    Fuel,
    Make,
    Series,
    BodyType,
    BodyNo,
    YearModel,
    GrossWeight,
    NetWeight,
    ShippingWeight,
    NetCapacity,
    YearLastRegistered,
    ExpirationDate,
}

/// Registration form order.
pub const VAN_FIELDS: [VanField; 19] = [
    VanField::MvFileNo,
    VanField::PlateNumber,
    VanField::EngineNo,
    VanField::ChassisNo,
    VanField::Denomination,
    VanField::PistonDisplacement,
    VanField::NumberOfCylinders,
    VanField::Fuel,
    VanField::Make,
    VanField::Series,
    VanField::BodyType,
    VanField::BodyNo,
    VanField::YearModel,
    VanField::GrossWeight,
    VanField::NetWeight,
    VanField::ShippingWeight,
    VanField::NetCapacity,
    VanField::YearLastRegistered,
    VanField::ExpirationDate,
];

impl VanField {
    pub fn label(self) -> &'static str {
        match self {
            Self::MvFileNo => "MV File No.",
            Self::PlateNumber => "Plate Number",
            Self::EngineNo => "Engine No",
            Self::ChassisNo => "Chassis No",
            Self::Denomination => "Denomination",
            Self::PistonDisplacement => "Piston Displacement",
            Self::NumberOfCylinders => "Number of Cylinders",
            Self::Fuel => "Fuel",
            Self::Make => "Make",
            Self::Series => "Series",
            Self::BodyType => "Body Type",
            Self::BodyNo => "Body No.",
            Self::YearModel => "Year Model",
            Self::GrossWeight => "Gross Weight",
            Self::NetWeight => "Net Weight",
            Self::ShippingWeight => "Shipping Weight",
            Self::NetCapacity => "Net Capacity",
            Self::YearLastRegistered => "Year Last Registered",
            Self::ExpirationDate => "Expiration Date",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::MvFileNo => "mv_file_no",
            Self::PlateNumber => "plate_number",
            Self::EngineNo => "engine_no",
            Self::ChassisNo => "chassis_no",
            Self::Denomination => "denomination",
            Self::PistonDisplacement => "piston_displacement",
            Self::NumberOfCylinders => "number_of_cylinders",
            Self::Fuel => "fuel",
            Self::Make => "make",
            Self::Series => "series",
            Self::BodyType => "body_type",
            Self::BodyNo => "body_no",
            Self::YearModel => "year_model",
            Self::GrossWeight => "gross_weight",
            Self::NetWeight => "net_weight",
            Self::ShippingWeight => "shipping_weight",
            Self::NetCapacity => "net_capacity",
            Self::YearLastRegistered => "year_last_registered",
            Self::ExpirationDate => "expiration_date",
        }
    }

    pub fn kind(self) -> VanFieldKind {
        match self {
            Self::NumberOfCylinders | Self::YearModel | Self::YearLastRegistered => VanFieldKind::Integer,
            Self::GrossWeight | Self::NetWeight | Self::ShippingWeight | Self::NetCapacity => VanFieldKind::Float,
            _ => VanFieldKind::Text,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/* -------------------------------------------------------------------------- */
/*                                    draft                                   */
/* -------------------------------------------------------------------------- */

/// Raw text of the registration form, one entry per [`VAN_FIELDS`] slot.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct VanDraft {
    values: [String; 19],
}

impl VanDraft {
    pub fn get(&self, field: VanField) -> &str {
        &self.values[field.index()]
    }

    pub fn with(&self, field: VanField, value: String) -> Self {
        let mut next = self.clone();
        next.values[field.index()] = value;
        next
    }

    fn text(&self, field: VanField) -> String {
        self.get(field).to_string()
    }

    fn int(&self, field: VanField) -> Option<i64> {
        parse_int(self.get(field))
    }

    fn float(&self, field: VanField) -> Option<f64> {
        parse_float(self.get(field))
    }

    /// Builds the request body: text passes through, the seven numeric
    /// fields are parsed.
    pub fn to_details(&self) -> VanDetails {
        use VanField::*;

        VanDetails {
            mv_file_no: self.text(MvFileNo),
            plate_number: self.text(PlateNumber),
            engine_no: self.text(EngineNo),
            chassis_no: self.text(ChassisNo),
            denomination: self.text(Denomination),
            piston_displacement: self.text(PistonDisplacement),
            number_of_cylinders: self.int(NumberOfCylinders),
            fuel: self.text(Fuel),
            make: self.text(Make),
            series: self.text(Series),
            body_type: self.text(BodyType),
            body_no: self.text(BodyNo),
            year_model: self.int(YearModel),
            gross_weight: self.float(GrossWeight),
            net_weight: self.float(NetWeight),
            shipping_weight: self.float(ShippingWeight),
            net_capacity: self.float(NetCapacity),
            year_last_registered: self.int(YearLastRegistered),
            expiration_date: self.text(ExpirationDate),
        }
    }
}
