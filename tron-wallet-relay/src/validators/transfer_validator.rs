use crate::domain::error::*;
use crate::domain::transfer::{TransferBody, TransferCommand};
use tron_wallet_core::TronAddress;

fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Check the request shape before anything touches the network.
///
/// Order: required parameters, then the private key requirement for real
/// transfers, then the token contract format. Recipient and amount syntax
/// are left to the wallet core so the messages match the CLI.
pub fn validate_transfer(body: TransferBody) -> Result<TransferCommand, RelayError> {
    let to_address = present(body.to_address);
    let amount = body
        .amount
        .filter(|a| !a.is_blank())
        .map(|a| a.as_decimal_string());
    let from_private_key = present(body.from_private_key);
    let from_address = present(body.from_address);

    let (to_address, amount) = match (to_address, amount) {
        (Some(to), Some(amount)) if from_private_key.is_some() || from_address.is_some() => (to, amount),
        _ => return Err(RelayError::validation(MISSING_PARAMETERS)),
    };

    let simulate = body.simulate.unwrap_or(false);
    if !simulate && from_private_key.is_none() {
        return Err(RelayError::validation(PRIVATE_KEY_REQUIRED));
    }

    let token_contract = match present(body.token_contract_address) {
        Some(contract) => Some(
            contract
                .parse::<TronAddress>()
                .map_err(|_| RelayError::validation(INVALID_TOKEN_CONTRACT))?,
        ),
        None => None,
    };

    Ok(TransferCommand {
        from_private_key,
        from_address,
        to_address,
        amount,
        token_contract,
        simulate,
    })
}
