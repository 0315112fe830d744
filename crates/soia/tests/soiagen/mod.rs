//! Hand-assembled equivalents of soia compiler output, shared by the
//! integration tests. Each type follows the generated-code conventions:
//! a frozen struct with a `Mutable` builder, `whole` and `serializer`
//! accessors, and enums with an `Unknown` variant and `kind` names.
#![allow(dead_code)]

use std::sync::OnceLock;

use soia::{
    array_serializer, bool_serializer, bytes_serializer, float32_serializer, float64_serializer,
    int32_serializer, int64_serializer, keyed_array_serializer, lazy_serializer,
    optional_serializer, string_serializer, timestamp_serializer, uint64_serializer, Enum,
    EnumBuilder, KeyedArray, Serializer, Struct, StructBuilder, Timestamp, UnrecognizedEnum,
    UnrecognizedFields,
};

// struct FullName, from user.soia rev 2: first_name, last_name.

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FullName {
    pub first_name: String,
    pub last_name: String,
    unrecognized: UnrecognizedFields,
}

#[derive(Clone, Debug, Default)]
pub struct FullNameMutable {
    pub first_name: String,
    pub last_name: String,
}

impl FullName {
    pub fn whole(first_name: impl Into<String>, last_name: impl Into<String>) -> FullName {
        FullName {
            first_name: first_name.into(),
            last_name: last_name.into(),
            unrecognized: UnrecognizedFields::default(),
        }
    }

    pub fn to_mutable(&self) -> FullNameMutable {
        FullNameMutable {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    pub fn serializer() -> &'static Serializer<FullName> {
        static SERIALIZER: OnceLock<Serializer<FullName>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            StructBuilder::<FullName>::new("user.soia:FullName")
                .field(
                    "first_name",
                    0,
                    string_serializer(),
                    |value| &value.first_name,
                    |mutable, value| mutable.first_name = value,
                )
                .field(
                    "last_name",
                    1,
                    string_serializer(),
                    |value| &value.last_name,
                    |mutable, value| mutable.last_name = value,
                )
                .build()
        })
    }
}

impl FullNameMutable {
    pub fn to_frozen(self) -> FullName {
        FullName::from_mutable(self)
    }
}

impl Struct for FullName {
    type Mutable = FullNameMutable;

    fn from_mutable(mutable: FullNameMutable) -> FullName {
        FullName {
            first_name: mutable.first_name,
            last_name: mutable.last_name,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    fn unrecognized_fields(&self) -> &UnrecognizedFields {
        &self.unrecognized
    }

    fn with_unrecognized_fields(mut self, fields: UnrecognizedFields) -> FullName {
        self.unrecognized = fields;
        self
    }
}

// struct FullName, as of user.soia rev 1: first_name only. Reads traffic
// written by rev 2.

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FullNameV1 {
    pub first_name: String,
    unrecognized: UnrecognizedFields,
}

#[derive(Clone, Debug, Default)]
pub struct FullNameV1Mutable {
    pub first_name: String,
}

impl FullNameV1 {
    pub fn whole(first_name: impl Into<String>) -> FullNameV1 {
        FullNameV1 {
            first_name: first_name.into(),
            unrecognized: UnrecognizedFields::default(),
        }
    }

    pub fn serializer() -> &'static Serializer<FullNameV1> {
        static SERIALIZER: OnceLock<Serializer<FullNameV1>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            StructBuilder::<FullNameV1>::new("user.soia:FullName")
                .field(
                    "first_name",
                    0,
                    string_serializer(),
                    |value| &value.first_name,
                    |mutable, value| mutable.first_name = value,
                )
                .build()
        })
    }
}

impl Struct for FullNameV1 {
    type Mutable = FullNameV1Mutable;

    fn from_mutable(mutable: FullNameV1Mutable) -> FullNameV1 {
        FullNameV1 {
            first_name: mutable.first_name,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    fn unrecognized_fields(&self) -> &UnrecognizedFields {
        &self.unrecognized
    }

    fn with_unrecognized_fields(mut self, fields: UnrecognizedFields) -> FullNameV1 {
        self.unrecognized = fields;
        self
    }
}

// struct Point, from structs.soia.

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    unrecognized: UnrecognizedFields,
}

#[derive(Clone, Debug, Default)]
pub struct PointMutable {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn whole(x: i32, y: i32) -> Point {
        Point {
            x,
            y,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    pub fn serializer() -> &'static Serializer<Point> {
        static SERIALIZER: OnceLock<Serializer<Point>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            StructBuilder::<Point>::new("structs.soia:Point")
                .field(
                    "x",
                    0,
                    int32_serializer(),
                    |value| &value.x,
                    |mutable, value| mutable.x = value,
                )
                .field(
                    "y",
                    1,
                    int32_serializer(),
                    |value| &value.y,
                    |mutable, value| mutable.y = value,
                )
                .build()
        })
    }
}

impl PointMutable {
    pub fn to_frozen(self) -> Point {
        Point::from_mutable(self)
    }
}

impl Struct for Point {
    type Mutable = PointMutable;

    fn from_mutable(mutable: PointMutable) -> Point {
        Point {
            x: mutable.x,
            y: mutable.y,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    fn unrecognized_fields(&self) -> &UnrecognizedFields {
        &self.unrecognized
    }

    fn with_unrecognized_fields(mut self, fields: UnrecognizedFields) -> Point {
        self.unrecognized = fields;
        self
    }
}

// struct Sparse, from structs.soia: numbers 1 through 3 belonged to removed
// fields.

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sparse {
    pub alpha: String,
    pub gamma: i32,
    unrecognized: UnrecognizedFields,
}

#[derive(Clone, Debug, Default)]
pub struct SparseMutable {
    pub alpha: String,
    pub gamma: i32,
}

impl Sparse {
    pub fn whole(alpha: impl Into<String>, gamma: i32) -> Sparse {
        Sparse {
            alpha: alpha.into(),
            gamma,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    pub fn serializer() -> &'static Serializer<Sparse> {
        static SERIALIZER: OnceLock<Serializer<Sparse>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            StructBuilder::<Sparse>::new("structs.soia:Sparse")
                .field(
                    "alpha",
                    0,
                    string_serializer(),
                    |value| &value.alpha,
                    |mutable, value| mutable.alpha = value,
                )
                .field(
                    "gamma",
                    4,
                    int32_serializer(),
                    |value| &value.gamma,
                    |mutable, value| mutable.gamma = value,
                )
                .build()
        })
    }
}

impl Struct for Sparse {
    type Mutable = SparseMutable;

    fn from_mutable(mutable: SparseMutable) -> Sparse {
        Sparse {
            alpha: mutable.alpha,
            gamma: mutable.gamma,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    fn unrecognized_fields(&self) -> &UnrecognizedFields {
        &self.unrecognized
    }

    fn with_unrecognized_fields(mut self, fields: UnrecognizedFields) -> Sparse {
        self.unrecognized = fields;
        self
    }
}

// struct Mixture, from structs.soia: one field of every primitive type plus
// an optional and an array.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mixture {
    pub flag: bool,
    pub small: i32,
    pub signed: i64,
    pub unsigned: u64,
    pub ratio: f32,
    pub precise: f64,
    pub label: String,
    pub blob: Vec<u8>,
    pub created: Timestamp,
    pub note: Option<String>,
    pub tags: Vec<String>,
    unrecognized: UnrecognizedFields,
}

#[derive(Clone, Debug, Default)]
pub struct MixtureMutable {
    pub flag: bool,
    pub small: i32,
    pub signed: i64,
    pub unsigned: u64,
    pub ratio: f32,
    pub precise: f64,
    pub label: String,
    pub blob: Vec<u8>,
    pub created: Timestamp,
    pub note: Option<String>,
    pub tags: Vec<String>,
}

impl Mixture {
    pub fn to_mutable(&self) -> MixtureMutable {
        MixtureMutable {
            flag: self.flag,
            small: self.small,
            signed: self.signed,
            unsigned: self.unsigned,
            ratio: self.ratio,
            precise: self.precise,
            label: self.label.clone(),
            blob: self.blob.clone(),
            created: self.created,
            note: self.note.clone(),
            tags: self.tags.clone(),
        }
    }

    pub fn serializer() -> &'static Serializer<Mixture> {
        static SERIALIZER: OnceLock<Serializer<Mixture>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            StructBuilder::<Mixture>::new("structs.soia:Mixture")
                .field(
                    "flag",
                    0,
                    bool_serializer(),
                    |value| &value.flag,
                    |mutable, value| mutable.flag = value,
                )
                .field(
                    "small",
                    1,
                    int32_serializer(),
                    |value| &value.small,
                    |mutable, value| mutable.small = value,
                )
                .field(
                    "signed",
                    2,
                    int64_serializer(),
                    |value| &value.signed,
                    |mutable, value| mutable.signed = value,
                )
                .field(
                    "unsigned",
                    3,
                    uint64_serializer(),
                    |value| &value.unsigned,
                    |mutable, value| mutable.unsigned = value,
                )
                .field(
                    "ratio",
                    4,
                    float32_serializer(),
                    |value| &value.ratio,
                    |mutable, value| mutable.ratio = value,
                )
                .field(
                    "precise",
                    5,
                    float64_serializer(),
                    |value| &value.precise,
                    |mutable, value| mutable.precise = value,
                )
                .field(
                    "label",
                    6,
                    string_serializer(),
                    |value| &value.label,
                    |mutable, value| mutable.label = value,
                )
                .field(
                    "blob",
                    7,
                    bytes_serializer(),
                    |value| &value.blob,
                    |mutable, value| mutable.blob = value,
                )
                .field(
                    "created",
                    8,
                    timestamp_serializer(),
                    |value| &value.created,
                    |mutable, value| mutable.created = value,
                )
                .field(
                    "note",
                    9,
                    optional_serializer(string_serializer()),
                    |value| &value.note,
                    |mutable, value| mutable.note = value,
                )
                .field(
                    "tags",
                    10,
                    array_serializer(string_serializer()),
                    |value| &value.tags,
                    |mutable, value| mutable.tags = value,
                )
                .build()
        })
    }
}

impl MixtureMutable {
    pub fn to_frozen(self) -> Mixture {
        Mixture::from_mutable(self)
    }
}

impl Struct for Mixture {
    type Mutable = MixtureMutable;

    fn from_mutable(mutable: MixtureMutable) -> Mixture {
        Mixture {
            flag: mutable.flag,
            small: mutable.small,
            signed: mutable.signed,
            unsigned: mutable.unsigned,
            ratio: mutable.ratio,
            precise: mutable.precise,
            label: mutable.label,
            blob: mutable.blob,
            created: mutable.created,
            note: mutable.note,
            tags: mutable.tags,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    fn unrecognized_fields(&self) -> &UnrecognizedFields {
        &self.unrecognized
    }

    fn with_unrecognized_fields(mut self, fields: UnrecognizedFields) -> Mixture {
        self.unrecognized = fields;
        self
    }
}

// struct Rgb and enum Color, from enums.soia rev 2.

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    unrecognized: UnrecognizedFields,
}

#[derive(Clone, Debug, Default)]
pub struct RgbMutable {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub fn whole(r: i32, g: i32, b: i32) -> Rgb {
        Rgb {
            r,
            g,
            b,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    pub fn serializer() -> &'static Serializer<Rgb> {
        static SERIALIZER: OnceLock<Serializer<Rgb>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            StructBuilder::<Rgb>::new("enums.soia:Rgb")
                .field(
                    "r",
                    0,
                    int32_serializer(),
                    |value| &value.r,
                    |mutable, value| mutable.r = value,
                )
                .field(
                    "g",
                    1,
                    int32_serializer(),
                    |value| &value.g,
                    |mutable, value| mutable.g = value,
                )
                .field(
                    "b",
                    2,
                    int32_serializer(),
                    |value| &value.b,
                    |mutable, value| mutable.b = value,
                )
                .build()
        })
    }
}

impl Struct for Rgb {
    type Mutable = RgbMutable;

    fn from_mutable(mutable: RgbMutable) -> Rgb {
        Rgb {
            r: mutable.r,
            g: mutable.g,
            b: mutable.b,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    fn unrecognized_fields(&self) -> &UnrecognizedFields {
        &self.unrecognized
    }

    fn with_unrecognized_fields(mut self, fields: UnrecognizedFields) -> Rgb {
        self.unrecognized = fields;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Unknown(UnrecognizedEnum),
    Red,
    Green,
    Blue,
    Rgb(Rgb),
}

impl Color {
    pub fn kind(&self) -> &'static str {
        match self {
            Color::Unknown(_) => "?",
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Rgb(_) => "rgb",
        }
    }

    pub fn serializer() -> &'static Serializer<Color> {
        static SERIALIZER: OnceLock<Serializer<Color>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            EnumBuilder::<Color>::new("enums.soia:Color")
                .constant("RED", 1, Color::Red, |value| matches!(value, Color::Red))
                .constant("GREEN", 2, Color::Green, |value| {
                    matches!(value, Color::Green)
                })
                .constant("BLUE", 3, Color::Blue, |value| matches!(value, Color::Blue))
                .variant(
                    "rgb",
                    4,
                    Rgb::serializer().clone(),
                    Color::Rgb,
                    |value| match value {
                        Color::Rgb(rgb) => Some(rgb),
                        _ => None,
                    },
                )
                .build()
        })
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::Unknown(UnrecognizedEnum::default())
    }
}

impl Enum for Color {
    fn from_unrecognized(unrecognized: UnrecognizedEnum) -> Color {
        Color::Unknown(unrecognized)
    }

    fn unrecognized(&self) -> Option<&UnrecognizedEnum> {
        match self {
            Color::Unknown(unrecognized) => Some(unrecognized),
            _ => None,
        }
    }
}

// enum Color, as of enums.soia rev 1: RED only.

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorV1 {
    Unknown(UnrecognizedEnum),
    Red,
}

impl ColorV1 {
    pub fn kind(&self) -> &'static str {
        match self {
            ColorV1::Unknown(_) => "?",
            ColorV1::Red => "RED",
        }
    }

    pub fn serializer() -> &'static Serializer<ColorV1> {
        static SERIALIZER: OnceLock<Serializer<ColorV1>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            EnumBuilder::<ColorV1>::new("enums.soia:Color")
                .constant("RED", 1, ColorV1::Red, |value| matches!(value, ColorV1::Red))
                .build()
        })
    }
}

impl Default for ColorV1 {
    fn default() -> ColorV1 {
        ColorV1::Unknown(UnrecognizedEnum::default())
    }
}

impl Enum for ColorV1 {
    fn from_unrecognized(unrecognized: UnrecognizedEnum) -> ColorV1 {
        ColorV1::Unknown(unrecognized)
    }

    fn unrecognized(&self) -> Option<&UnrecognizedEnum> {
        match self {
            ColorV1::Unknown(unrecognized) => Some(unrecognized),
            _ => None,
        }
    }
}

// enum Weekday and the keyed-array item types, from items.soia.

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Weekday {
    Unknown(UnrecognizedEnum),
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn kind(&self) -> &'static str {
        match self {
            Weekday::Unknown(_) => "?",
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
            Weekday::Sunday => "SUNDAY",
        }
    }

    pub fn serializer() -> &'static Serializer<Weekday> {
        static SERIALIZER: OnceLock<Serializer<Weekday>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            EnumBuilder::<Weekday>::new("items.soia:Weekday")
                .constant("MONDAY", 1, Weekday::Monday, |value| {
                    matches!(value, Weekday::Monday)
                })
                .constant("TUESDAY", 2, Weekday::Tuesday, |value| {
                    matches!(value, Weekday::Tuesday)
                })
                .constant("WEDNESDAY", 3, Weekday::Wednesday, |value| {
                    matches!(value, Weekday::Wednesday)
                })
                .constant("THURSDAY", 4, Weekday::Thursday, |value| {
                    matches!(value, Weekday::Thursday)
                })
                .constant("FRIDAY", 5, Weekday::Friday, |value| {
                    matches!(value, Weekday::Friday)
                })
                .constant("SATURDAY", 6, Weekday::Saturday, |value| {
                    matches!(value, Weekday::Saturday)
                })
                .constant("SUNDAY", 7, Weekday::Sunday, |value| {
                    matches!(value, Weekday::Sunday)
                })
                .build()
        })
    }
}

impl Default for Weekday {
    fn default() -> Weekday {
        Weekday::Unknown(UnrecognizedEnum::default())
    }
}

impl Enum for Weekday {
    fn from_unrecognized(unrecognized: UnrecognizedEnum) -> Weekday {
        Weekday::Unknown(unrecognized)
    }

    fn unrecognized(&self) -> Option<&UnrecognizedEnum> {
        match self {
            Weekday::Unknown(unrecognized) => Some(unrecognized),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Item {
    pub weekday: Weekday,
    pub id: String,
    unrecognized: UnrecognizedFields,
}

#[derive(Clone, Debug, Default)]
pub struct ItemMutable {
    pub weekday: Weekday,
    pub id: String,
}

impl Item {
    pub fn whole(weekday: Weekday, id: impl Into<String>) -> Item {
        Item {
            weekday,
            id: id.into(),
            unrecognized: UnrecognizedFields::default(),
        }
    }

    pub fn serializer() -> &'static Serializer<Item> {
        static SERIALIZER: OnceLock<Serializer<Item>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            StructBuilder::<Item>::new("items.soia:Item")
                .field(
                    "weekday",
                    0,
                    Weekday::serializer().clone(),
                    |value| &value.weekday,
                    |mutable, value| mutable.weekday = value,
                )
                .field(
                    "id",
                    1,
                    string_serializer(),
                    |value| &value.id,
                    |mutable, value| mutable.id = value,
                )
                .build()
        })
    }
}

impl Struct for Item {
    type Mutable = ItemMutable;

    fn from_mutable(mutable: ItemMutable) -> Item {
        Item {
            weekday: mutable.weekday,
            id: mutable.id,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    fn unrecognized_fields(&self) -> &UnrecognizedFields {
        &self.unrecognized
    }

    fn with_unrecognized_fields(mut self, fields: UnrecognizedFields) -> Item {
        self.unrecognized = fields;
        self
    }
}

fn item_id(item: &Item) -> String {
    item.id.clone()
}

fn item_weekday(item: &Item) -> &'static str {
    item.weekday.kind()
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemList {
    pub by_id: KeyedArray<Item, String>,
    pub by_weekday: KeyedArray<Item, &'static str>,
    unrecognized: UnrecognizedFields,
}

#[derive(Clone, Debug, Default)]
pub struct ItemListMutable {
    pub by_id: Vec<Item>,
    pub by_weekday: Vec<Item>,
}

impl ItemList {
    pub fn whole(by_id: Vec<Item>, by_weekday: Vec<Item>) -> ItemList {
        ItemList {
            by_id: KeyedArray::new(by_id, item_id),
            by_weekday: KeyedArray::new(by_weekday, item_weekday),
            unrecognized: UnrecognizedFields::default(),
        }
    }

    pub fn serializer() -> &'static Serializer<ItemList> {
        static SERIALIZER: OnceLock<Serializer<ItemList>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            StructBuilder::<ItemList>::new("items.soia:ItemList")
                .field(
                    "by_id",
                    0,
                    keyed_array_serializer(Item::serializer().clone(), "id", item_id),
                    |value| &value.by_id,
                    |mutable, value| mutable.by_id = value.into_items(),
                )
                .field(
                    "by_weekday",
                    1,
                    keyed_array_serializer(Item::serializer().clone(), "weekday", item_weekday),
                    |value| &value.by_weekday,
                    |mutable, value| mutable.by_weekday = value.into_items(),
                )
                .build()
        })
    }
}

impl ItemListMutable {
    pub fn to_frozen(self) -> ItemList {
        ItemList::from_mutable(self)
    }
}

impl Default for ItemList {
    fn default() -> ItemList {
        ItemListMutable::default().to_frozen()
    }
}

impl Struct for ItemList {
    type Mutable = ItemListMutable;

    fn from_mutable(mutable: ItemListMutable) -> ItemList {
        ItemList {
            by_id: KeyedArray::new(mutable.by_id, item_id),
            by_weekday: KeyedArray::new(mutable.by_weekday, item_weekday),
            unrecognized: UnrecognizedFields::default(),
        }
    }

    fn unrecognized_fields(&self) -> &UnrecognizedFields {
        &self.unrecognized
    }

    fn with_unrecognized_fields(mut self, fields: UnrecognizedFields) -> ItemList {
        self.unrecognized = fields;
        self
    }
}

// Recursive enum JsonValue with struct JsonPair, from json.soia. The array
// and object variants reach back to JsonValue itself, which is what
// lazy_serializer exists for.

#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
    Unknown(UnrecognizedEnum),
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(Vec<JsonPair>),
}

impl JsonValue {
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Unknown(_) => "?",
            JsonValue::Null => "NULL",
            JsonValue::Boolean(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }

    pub fn serializer() -> &'static Serializer<JsonValue> {
        static SERIALIZER: OnceLock<Serializer<JsonValue>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            EnumBuilder::<JsonValue>::new("json.soia:JsonValue")
                .constant("NULL", 1, JsonValue::Null, |value| {
                    matches!(value, JsonValue::Null)
                })
                .variant(
                    "boolean",
                    2,
                    bool_serializer(),
                    JsonValue::Boolean,
                    |value| match value {
                        JsonValue::Boolean(inner) => Some(inner),
                        _ => None,
                    },
                )
                .variant(
                    "number",
                    3,
                    float64_serializer(),
                    JsonValue::Number,
                    |value| match value {
                        JsonValue::Number(inner) => Some(inner),
                        _ => None,
                    },
                )
                .variant(
                    "string",
                    4,
                    string_serializer(),
                    JsonValue::String,
                    |value| match value {
                        JsonValue::String(inner) => Some(inner),
                        _ => None,
                    },
                )
                .variant(
                    "array",
                    5,
                    array_serializer(lazy_serializer(JsonValue::serializer)),
                    JsonValue::Array,
                    |value| match value {
                        JsonValue::Array(inner) => Some(inner),
                        _ => None,
                    },
                )
                .variant(
                    "object",
                    6,
                    array_serializer(JsonPair::serializer().clone()),
                    JsonValue::Object,
                    |value| match value {
                        JsonValue::Object(inner) => Some(inner),
                        _ => None,
                    },
                )
                .build()
        })
    }
}

impl Default for JsonValue {
    fn default() -> JsonValue {
        JsonValue::Unknown(UnrecognizedEnum::default())
    }
}

impl Enum for JsonValue {
    fn from_unrecognized(unrecognized: UnrecognizedEnum) -> JsonValue {
        JsonValue::Unknown(unrecognized)
    }

    fn unrecognized(&self) -> Option<&UnrecognizedEnum> {
        match self {
            JsonValue::Unknown(unrecognized) => Some(unrecognized),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JsonPair {
    pub name: String,
    pub value: JsonValue,
    unrecognized: UnrecognizedFields,
}

#[derive(Clone, Debug, Default)]
pub struct JsonPairMutable {
    pub name: String,
    pub value: JsonValue,
}

impl JsonPair {
    pub fn whole(name: impl Into<String>, value: JsonValue) -> JsonPair {
        JsonPair {
            name: name.into(),
            value,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    pub fn serializer() -> &'static Serializer<JsonPair> {
        static SERIALIZER: OnceLock<Serializer<JsonPair>> = OnceLock::new();
        SERIALIZER.get_or_init(|| {
            StructBuilder::<JsonPair>::new("json.soia:JsonPair")
                .field(
                    "name",
                    0,
                    string_serializer(),
                    |value| &value.name,
                    |mutable, value| mutable.name = value,
                )
                .field(
                    "value",
                    1,
                    lazy_serializer(JsonValue::serializer),
                    |value| &value.value,
                    |mutable, value| mutable.value = value,
                )
                .build()
        })
    }
}

impl Struct for JsonPair {
    type Mutable = JsonPairMutable;

    fn from_mutable(mutable: JsonPairMutable) -> JsonPair {
        JsonPair {
            name: mutable.name,
            value: mutable.value,
            unrecognized: UnrecognizedFields::default(),
        }
    }

    fn unrecognized_fields(&self) -> &UnrecognizedFields {
        &self.unrecognized
    }

    fn with_unrecognized_fields(mut self, fields: UnrecognizedFields) -> JsonPair {
        self.unrecognized = fields;
        self
    }
}
