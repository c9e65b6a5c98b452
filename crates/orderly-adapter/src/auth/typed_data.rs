/*
[INPUT]:  Broker/chain identifiers and per-flow nonces
[OUTPUT]: EIP-712 domain/types/message payloads for wallet signing
[POS]:    Auth layer - structured payloads for wallet-signed operations
[UPDATE]: When the on-chain verifier schema or contract addresses change
*/

use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Value, json};

use crate::http::{OrderlyError, Result};
use crate::types::ChainType;

/// Ledger contract that verifies wallet signatures for these flows.
const VERIFYING_CONTRACT_MAINNET: &str = "0x6F7a338F2aA472838dEFD3283eB360d4Dff5D203";
const VERIFYING_CONTRACT_TESTNET: &str = "0x1826B75e2ef249173FC735149AE4B8e9ea10abff";

const DOMAIN_NAME: &str = "Orderly";
const DOMAIN_VERSION: &str = "1";

/// EIP-712 domain separator fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataDomain {
    pub name: &'static str,
    pub version: &'static str,
    pub chain_id: u64,
    pub verifying_contract: &'static str,
}

/// One field of a typed-data struct definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: &'static str,
}

/// Ordered struct definitions keyed by struct name.
///
/// Field order and naming are hashed by the verifying party, so this
/// serializes in declaration order, never alphabetically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinitions(Vec<(&'static str, Vec<TypedField>)>);

impl Serialize for TypeDefinitions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, fields) in &self.0 {
            map.serialize_entry(name, fields)?;
        }
        map.end()
    }
}

/// Complete payload handed to an external wallet signer.
///
/// This subsystem performs no signing; the wallet's signature plus this
/// payload are forwarded verbatim to the exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataPayload {
    pub domain: TypedDataDomain,
    pub primary_type: &'static str,
    pub types: TypeDefinitions,
    pub message: Value,
}

fn field(name: &'static str, field_type: &'static str) -> TypedField {
    TypedField { name, field_type }
}

fn domain(chain_id: u64) -> TypedDataDomain {
    TypedDataDomain {
        name: DOMAIN_NAME,
        version: DOMAIN_VERSION,
        chain_id,
        verifying_contract: verifying_contract(chain_id),
    }
}

/// Verifying contract address for the target chain.
pub fn verifying_contract(chain_id: u64) -> &'static str {
    // Testnet chains (Arbitrum/Base/Optimism Sepolia, BSC testnet).
    match chain_id {
        421614 | 84532 | 11155420 | 97 => VERIFYING_CONTRACT_TESTNET,
        _ => VERIFYING_CONTRACT_MAINNET,
    }
}

fn check_broker_id(broker_id: &str) -> Result<()> {
    if broker_id.is_empty() {
        return Err(OrderlyError::SchemaMismatch(
            "brokerId must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

fn check_chain_id(chain_id: u64) -> Result<()> {
    if chain_id == 0 {
        return Err(OrderlyError::SchemaMismatch(
            "chainId must be a non-zero integer".to_string(),
        ));
    }
    Ok(())
}

/// Payload for PnL settlement (struct `SettlePnl`).
pub fn settlement_payload(
    broker_id: &str,
    chain_id: u64,
    chain_type: ChainType,
    settle_nonce: u64,
    timestamp_ms: u64,
) -> Result<TypedDataPayload> {
    check_broker_id(broker_id)?;
    check_chain_id(chain_id)?;

    Ok(TypedDataPayload {
        domain: domain(chain_id),
        primary_type: "SettlePnl",
        types: TypeDefinitions(vec![(
            "SettlePnl",
            vec![
                field("brokerId", "string"),
                field("chainId", "uint256"),
                field("chainType", "string"),
                field("settleNonce", "uint64"),
                field("timestamp", "uint64"),
            ],
        )]),
        message: json!({
            "brokerId": broker_id,
            "chainId": chain_id,
            "chainType": chain_type.as_str(),
            "settleNonce": settle_nonce,
            "timestamp": timestamp_ms,
        }),
    })
}

/// Payload for claiming liquidated positions (struct
/// `ClaimLiquidatedPositions`).
pub fn liquidation_claim_payload(
    broker_id: &str,
    chain_id: u64,
    chain_type: ChainType,
    liquidation_id: u64,
    timestamp_ms: u64,
) -> Result<TypedDataPayload> {
    check_broker_id(broker_id)?;
    check_chain_id(chain_id)?;

    Ok(TypedDataPayload {
        domain: domain(chain_id),
        primary_type: "ClaimLiquidatedPositions",
        types: TypeDefinitions(vec![(
            "ClaimLiquidatedPositions",
            vec![
                field("brokerId", "string"),
                field("chainId", "uint256"),
                field("chainType", "string"),
                field("liquidationId", "uint64"),
                field("timestamp", "uint64"),
            ],
        )]),
        message: json!({
            "brokerId": broker_id,
            "chainId": chain_id,
            "chainType": chain_type.as_str(),
            "liquidationId": liquidation_id,
            "timestamp": timestamp_ms,
        }),
    })
}

/// Payload for claiming from the insurance fund (struct
/// `ClaimFromInsuranceFund`).
pub fn insurance_fund_claim_payload(
    broker_id: &str,
    chain_id: u64,
    chain_type: ChainType,
    liquidation_id: u64,
    transfer_amount_to_insurance_fund: u128,
    timestamp_ms: u64,
) -> Result<TypedDataPayload> {
    check_broker_id(broker_id)?;
    check_chain_id(chain_id)?;
    // serde_json numbers top out at u64; larger amounts would silently need
    // a string encoding the verifier does not accept.
    let transfer_amount = u64::try_from(transfer_amount_to_insurance_fund).map_err(|_| {
        OrderlyError::SchemaMismatch(
            "transferAmountToInsuranceFund exceeds the representable range".to_string(),
        )
    })?;

    Ok(TypedDataPayload {
        domain: domain(chain_id),
        primary_type: "ClaimFromInsuranceFund",
        types: TypeDefinitions(vec![(
            "ClaimFromInsuranceFund",
            vec![
                field("brokerId", "string"),
                field("chainId", "uint256"),
                field("chainType", "string"),
                field("liquidationId", "uint64"),
                field("transferAmountToInsuranceFund", "uint256"),
                field("timestamp", "uint64"),
            ],
        )]),
        message: json!({
            "brokerId": broker_id,
            "chainId": chain_id,
            "chainType": chain_type.as_str(),
            "liquidationId": liquidation_id,
            "transferAmountToInsuranceFund": transfer_amount,
            "timestamp": timestamp_ms,
        }),
    })
}
