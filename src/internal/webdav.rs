pub mod constants;
pub mod enums;
pub mod functions;
pub mod raw_xml;
