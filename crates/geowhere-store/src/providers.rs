//! Region code constants for the built-in table
//!
//! Codes shared across providers (for example `us-east-1` on AWS and Alibaba)
//! appear in each provider's module.

/// Amazon Web Services
pub mod aws {
    pub const US_EAST_1: &str = "us-east-1";
    pub const US_EAST_2: &str = "us-east-2";
    pub const US_WEST_1: &str = "us-west-1";
    pub const US_WEST_2: &str = "us-west-2";
    pub const CA_CENTRAL_1: &str = "ca-central-1";
    pub const CA_WEST_1: &str = "ca-west-1";
    pub const SA_EAST_1: &str = "sa-east-1";
    pub const EU_WEST_1: &str = "eu-west-1";
    pub const EU_WEST_2: &str = "eu-west-2";
    pub const EU_WEST_3: &str = "eu-west-3";
    pub const EU_CENTRAL_1: &str = "eu-central-1";
    pub const EU_CENTRAL_2: &str = "eu-central-2";
    pub const EU_NORTH_1: &str = "eu-north-1";
    pub const EU_SOUTH_1: &str = "eu-south-1";
    pub const AP_SOUTH_1: &str = "ap-south-1";
    pub const AP_SOUTHEAST_1: &str = "ap-southeast-1";
    pub const AP_SOUTHEAST_2: &str = "ap-southeast-2";
    pub const AP_SOUTHEAST_5: &str = "ap-southeast-5";
    pub const AP_NORTHEAST_1: &str = "ap-northeast-1";
    pub const AP_NORTHEAST_2: &str = "ap-northeast-2";
    pub const AP_NORTHEAST_3: &str = "ap-northeast-3";
    pub const AP_EAST_1: &str = "ap-east-1";
    pub const ME_SOUTH_1: &str = "me-south-1";
    pub const IL_CENTRAL_1: &str = "il-central-1";
    pub const AF_SOUTH_1: &str = "af-south-1";
}

/// Microsoft Azure
pub mod azure {
    pub const EAST_US: &str = "eastus";
    pub const EAST_US_2: &str = "eastus2";
    pub const WEST_US: &str = "westus";
    pub const WEST_US_2: &str = "westus2";
    pub const CENTRAL_US: &str = "centralus";
    pub const SOUTH_CENTRAL_US: &str = "southcentralus";
    pub const CANADA_CENTRAL: &str = "canadacentral";
    pub const BRAZIL_SOUTH: &str = "brazilsouth";
    pub const NORTH_EUROPE: &str = "northeurope";
    pub const WEST_EUROPE: &str = "westeurope";
    pub const UK_SOUTH: &str = "uksouth";
    pub const FRANCE_CENTRAL: &str = "francecentral";
    pub const GERMANY_WEST_CENTRAL: &str = "germanywestcentral";
    /// Closed to new customers
    pub const GERMANY_CENTRAL: &str = "germanycentral";
    pub const SWEDEN_CENTRAL: &str = "swedencentral";
    pub const JAPAN_EAST: &str = "japaneast";
    pub const JAPAN_WEST: &str = "japanwest";
    pub const SOUTHEAST_ASIA: &str = "southeastasia";
    pub const EAST_ASIA: &str = "eastasia";
    pub const CENTRAL_INDIA: &str = "centralindia";
    pub const UAE_NORTH: &str = "uaenorth";
    pub const AUSTRALIA_EAST: &str = "australiaeast";
    pub const NEW_ZEALAND_NORTH: &str = "newzealandnorth";
    pub const SOUTH_AFRICA_NORTH: &str = "southafricanorth";
}

/// Google Cloud Platform
pub mod gcp {
    pub const US_CENTRAL1: &str = "us-central1";
    pub const US_EAST1: &str = "us-east1";
    pub const US_EAST4: &str = "us-east4";
    pub const US_WEST1: &str = "us-west1";
    pub const US_WEST2: &str = "us-west2";
    pub const NORTHAMERICA_NORTHEAST1: &str = "northamerica-northeast1";
    pub const SOUTHAMERICA_EAST1: &str = "southamerica-east1";
    pub const EUROPE_WEST1: &str = "europe-west1";
    pub const EUROPE_WEST2: &str = "europe-west2";
    pub const EUROPE_WEST3: &str = "europe-west3";
    pub const EUROPE_WEST4: &str = "europe-west4";
    pub const EUROPE_NORTH1: &str = "europe-north1";
    pub const EUROPE_NORTH2: &str = "europe-north2";
    pub const ASIA_EAST1: &str = "asia-east1";
    pub const ASIA_NORTHEAST1: &str = "asia-northeast1";
    pub const ASIA_SOUTH1: &str = "asia-south1";
    pub const ASIA_SOUTHEAST1: &str = "asia-southeast1";
    pub const ME_WEST1: &str = "me-west1";
    pub const AUSTRALIA_SOUTHEAST1: &str = "australia-southeast1";
    pub const AFRICA_SOUTH1: &str = "africa-south1";
}

/// Alibaba Cloud
pub mod alibaba {
    pub const CN_HANGZHOU: &str = "cn-hangzhou";
    pub const CN_SHANGHAI: &str = "cn-shanghai";
    pub const CN_BEIJING: &str = "cn-beijing";
    pub const CN_SHENZHEN: &str = "cn-shenzhen";
    pub const AP_SOUTHEAST_1: &str = "ap-southeast-1";
    pub const AP_NORTHEAST_1: &str = "ap-northeast-1";
    pub const US_EAST_1: &str = "us-east-1";
    pub const US_WEST_1: &str = "us-west-1";
    pub const EU_CENTRAL_1: &str = "eu-central-1";
    pub const EU_WEST_1: &str = "eu-west-1";
    pub const ME_EAST_1: &str = "me-east-1";
}

/// Yandex Cloud
pub mod yandex {
    pub const RU_CENTRAL1: &str = "ru-central1";
    pub const KZ1: &str = "kz1";
}

/// VK Cloud
pub mod vk {
    pub const RU_MSK: &str = "ru-msk";
}
