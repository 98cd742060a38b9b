use super::*;

/// Build a string from `base_url` appended with the token ID encoded as hex.
pub fn build_token_metadata_url(base_url: &str, token_id: &ContractTokenId) -> String {
    let mut token_metadata_url = String::from(base_url);
    push_token_id(&mut token_metadata_url, token_id);
    token_metadata_url
}

pub fn push_token_id(string: &mut String, token_id: &ContractTokenId) {
    for byte in &token_id.0 {
        string.push(bits_to_hex_char(byte >> 4));
        string.push(bits_to_hex_char(byte & 0xF));
    }
}

fn bits_to_hex_char(bits: u8) -> char {
    match bits & 0xF {
        nibble @ 0x0..=0x9 => (nibble + b'0') as char,
        nibble => (nibble - 10 + b'a') as char,
    }
}

pub fn token_metadata_event(
    base_url: &str,
    token_id: ContractTokenId,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    let token_metadata_url = build_token_metadata_url(base_url, &token_id);
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl {
            url: token_metadata_url,
            hash: None,
        },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn token_id_formatting() {
        let mut token_id_string = String::new();
        push_token_id(&mut token_id_string, &TokenIdVec(vec![0x00, 0x0a, 0x9f, 0xff]));
        claim_eq!(token_id_string, "000a9fff");

        claim_eq!(
            build_token_metadata_url("https://metadata.test/", &TokenIdVec(vec![42])),
            "https://metadata.test/2a"
        );
    }
}
