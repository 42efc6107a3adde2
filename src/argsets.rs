use std::path::PathBuf;

pub struct IdArgs {
    pub id: String,
}

pub struct ProvisionArgs {
    pub plan: PathBuf,
}
