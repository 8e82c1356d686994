//! Midea units.

use super::ModelCodes;

pub(super) const CODES: ModelCodes = ModelCodes {
    name: "Midea Thermostat",
    min_temperature: 17,
    max_temperature: 30,
    off: "JgDMAI2TDjkPFA85DzgQEw8VDjkPFA8UDzkOFQ8UDzkOORATDzkOFBE3DzkOORA2EBUOOQ8FBC8QOA4VDxQPFQ4VDjkPFBAUDjkQNxA4DhUPFA8VDhUPFA8UDxUOFQ45DzkPOA84DzkOq5GTDzgPFA85DzgPFQ8UDjkQEw8VDjkQExATDzkPOA8UDzkPFA85DjkPOBA4DhUPOBA4DjkPFA8UDxUOFQ84DxUOFQ84DzkOORATDxUOFQ8UDxQPFQ4VDxQPOBA4DzgPOQ84DwANBQAAAAAAAAAAAAAAAA==",
    heat: &[
        /* 17 */ "JgDKAA45DxQPOQ84DxQPFA85DxQPFBA4DhUPFA85DjkPFA85DzgPFA85DjkPOA85DjkPOA8VDjkPFA8VDhUOFQ8UDxUOFQ8UDxQPFQ45DzgQFA4VDgYHKhE5DzgPOA8VDhUOORA3D66Okw45EBMQOA84DxQPFQ45DxQPFQ45DxQQEw85DzgPFA85DjkPFA85DjkQNw85DzgQOA8UDzgQEw8VDhUPFA8VDhUOFQ8UDxUOFQ45EDcQEhAVDzgPOQ45EDcQFA4VDzgPOQ4ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 18 */ "JgDKAI2UDjgQFA85DzgPFA8UDzkOFQ8UDzkOFQ8UDzgQOA8UDzgPOQ4VDzgPOQ84DzkOORA3EBQOORATDxUOFQ4VDxQPFQ4VDhUPFA85DzQVNg8VDhUPOA82ETkPFA8VDhUPOBA3EquOkw45EBMPOQ45DxQPFQ45DxQQFA45DxQQEw85ETYQEw46DzgPFA85DjkQOA45DzgPOQ4VDzgPFQ4VDhUQEw8VDhUOFQ8UDxUOORA3DzkPFA8UDzkOOBE3DxUOFQ4VDzgQOA8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 19 */ "JgDKAI2UDzgPFA84DzkPFA8UDzkPFA8UDzkPFA8UDzgPOQ8UDzkOOQ8UDzkOOQ84EDgPOBA3EBQOORATDxUOFQ4VDxQPFA8VDxQPOA85DjkPOQ4VDhUPOBA4DhUPFA8UDxUOOQ84EK2Okw84EBMPOQ84EBMPFQ45DxQPFA85DhUPFA85DjkPFA85DjkQEw85DjkPOBA4DjkPOA8VDjkQEw8VDhUPFA8UDxUOFQ4VDzgQOA84DzkOFQ8UDzgQOA4VDxQPFQ4VDjgQOQ8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 20 */ "JgDKAI2TDzgPFQ45EDcQFA4VDzgQFA4VDjkQExAUDjkPOA8VDzgQNw8VDjkQNxA4DzgPOQ84DxQPOBAUDhUPFA8VDhUPFA8UDxUOOQ8UDzkOOQ8UDxQPOQ84DxQPOQ8UEBMPOQ84D62OkxA4DhUPOBA4DxQPFA85DhUPFA84DxUOFQ84DzkOFQ84DzkOFQ84EDgPOBA3DzkPOBATDzkPFA8UEBQOFQ4VDxQPFQ4VDzgPFQ45DzgQEw8VDjkQNw8VDjkQEw8VDjkQNxAADQUAAAAAAAAAAAAAAAAAAA==",
        /* 21 */ "JgDKAI2TDzkPFA84DzkPFA8UDzkPFA8UDzgPFQ4VDzgPOQ4VDzgPOQ4VDzgPOQ84EDcPOQ45DxQPOQ8UDxQPFA8VDhUPFA8VDjkPOA8VDjkPOBAUDhUPOBATEBQOOQ8UDxUOOQ84EK2Okw45DxQPOQ84EBMPFA85DxQPFA85DhUPFBA4DjkPFA85DjkQEw85DjkPOBA4DjkPOQ4VDjQUFA8VDhUPFA8UDxUOFQ84EDgOFQ84DzkOFQ8UDzkPFA8UDzgPFQ4VDzgPOQ4ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 22 */ "JgDKAI2TDzgQFA84DzgQFA8UDjkQEw8VDjkQEw8VDjkPOBATDzkQNw8VDjkQNw85DjkPOBA4DxQQNw8VDhUPFA8UDxUOFQ8UDzkPOA84DzkOORATEBQPOBATDxQPFQ8UDxQPOQ45EKyPkhA0EhUPOA84DxUOFQ84EBQPFA84DxMQFQ45DzgPFQ45DzkOFQ84DzgQOA45DzkOOQ8UDzkOFQ8UDxQPFQ4VDxQPFA85DzgPOQ45DzgPFQ4VDjkPFA8VDhUOFQ8UDzkOORAADQUAAAAAAAAAAAAAAAAAAA==",
        /* 23 */ "JgDKAI6SDzkQEw84DzkPFA8UEDgOFQ8UDzkOFQ8UDzkOOQ8UEDgOOQ8UDzkPOA84DzkOORA3DxUOOQ8UDxUOFQ4VDxQPFQ4VETYPFBA4DzgPOQ4VDxQPOA8VDzgPFBAUDhUPOA85Dq6Okw84DxQPOQ45EBQPFA84DxQPFQ45DxQPFQ45DjkPFA85DjgQFA85DjkPOBA4DzgPORATDzgQEw8VDhUPFA8VDhUPFA84DxURNg84DzkQEw8UDzkOFQ84DxQPFQ4VDzgPOQ4ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 24 */ "JgDKAI2TDzgPFA85DjkPFA8VDjkPFBATDzgPFQ8UDzkOORATDzkOOQ8UDzkOOQ84EDgPOA85DxQPOA8UDxUPFA8UDxQPFQ8UDzgQFA4VDzgPOQ4VDxQQNxAUDjkQNw8VDhUPOBA4Dq6Okw84EBQOOQ84DxUOFQ84EBMPFQ45DxQPFQ45EDYQFQ45DzgQFA45EDcPOQ45EDcPOQ8UDzgQFA4VDxQPFQ4VDhUPFA85DxQPFA84DzcRFA8UDzkPFA84DzkOFQ8UDzkPOA8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 25 */ "JgDKAI2TDjkQEw85DjkPFA8VDjkPFA8VDjkPFA8UDzkOORATDzkOORATDzkOOQ85DzgPOBA4DxQPOBAUDhUOFQ8UDxUOFQ45DzkPFA8UDzgQOA8UDxQPFQ4VDzgRNw8UDxQPOBA4D62Okw84DxUOOBA4DxUOFQ84EBQOFQ84DxUOFQ84EDgPFA84EDYRFA45EDgPOA84DzkPOA8UDzkOFQ8UDxQPFQ8UDxQPOQ84EBMPFBA4DzgPFQ4VDhUPFA85DjkPFA8VDjkPOBAADQUAAAAAAAAAAAAAAAAAAA==",
        /* 26 */ "JgDKAI6TDzgPFA85DzgQEw8UDzkPFA8UDzkPFA8UDzkPOBATDzkOORATDzkPOBA3DzkPOBA2EBUOORATDxUOFQ8UDxQPFQ45DzgPFQ45DzgPOQ4VDxQQFA4VDzgQExISDhYOOBA4D62Okw84DxUOOQ84EBQOFQ84EBMPFQ45DxQPFQ45EDcQFA45DzgPFQ45EDcPOQ84DzgPOQ4VDzgQFA8UDxQPFA8VDxQPOBA4DxQPOA85DjkPFBAUDhUPFA84DxUOFQ8UDzkOOQ8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 27 */ "JgDKAI2TDzgPFA85DjkQEw8VDjkPFA8UDzkPFA8UDzkOOQ8UDzkPOBATDzkOOQ84EDgOOQ85DxQPOA8UDxUOFQ8UDxQPFQ45DxQPFQ45DzgPOQ8UDxQPFBA4DzgPFA8VDhUPOBA4Dq6Okw84DxUOOQ84EBQOFQ84EBQOFQ45DxQPFQ45EDcQFA45DzgPFQ45EDcQOA45DzgQOA4VDzgQFA4VDxQPFA8VDhUPOA8VDhUPOBA4DzgPFA8UDxUOOQ84EBQOFQ8UDzkPOA8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 28 */ "JgDOAI2TDjcSEw85DjkPFBAUDjkPFA8VDjkPFA8UEDgOORESDzkOOQ8UDjoOOQ84DzkPOA85DhUPOBAUDhUOFQ8UDxUOFQ45DhUPFQ4VDzgPOQ8UDxQPFA85DzgSNQ8VDhUPOBA4Dq6Okw45DxUOOQ84DxUNFg84DxUOFQ45DxQPFQ45DzgQFA84DzgPFQ45EDcPOQ45DzkOOQ8UDzgPFQ4WDhQPFQ4VDhUPOA8VDhUPFA85ETYOFQ8UDxUOORA3DzkPFA8UDzkOOQ8AA2sEAA0FAAAAAAAAAAAAAA==",
        /* 29 */ "JgDKAI2TEDgOFQ84DzkOFQ8UEDgOFQ8UEDgPFA4VDzgQOA4VDjkPOQ4VDzgQOA45EDcPOQ84DxQPOQ4VDxQPFQ8UDhUPFA85DhUPOA8VDjkPOA8VDhUOFQ85DhUOOQ8UDxUOOQ84D66Pkg84DxQPOQ84DxQPFA85DxQPFA85DxQPFA85DjkPFA85DjkPFA85DjkPOA85DjkPOA8VDjkPFA8VDhUPFA8UDxUOOQ8UDzkOFQ84DzkOFQ8UEBMQOA8UDzgPFQ4VDjkPOQ4ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 30 */ "JgDKAI2TDzkPFBA3DzkPFA8UDzkPFBATEDcPFQ4VDzgQOA8UDzUSOQ4VDzgPOQ84DzkQNw84DxUOOQ4VDxQPFQ4VDxQPFA46DxQPOA85DjkPOA8VDhUPFA85DxQOFQ8UDxUOOQ84D66Okw45DxQQOA45EBMQEw85DxQPFBM1DhUREg85DjkPFA85DzgPFA85DzQTOA85DzgPOBAUDjkPFA8VDhUOFQ8UDxUOORATDzkPOA84EDgOFQ4VDxQPORATDxQQFA4VDjkPOQ8ADQUAAAAAAAAAAAAAAAAAAA==",
    ],
    cool: &[
        /* 17 */ "JgDKAI6SEDgPFA85DjkPFA8UDzkPFA8UDzkOFQ8UDzkOOQ8UDzkPOA8UDzkOOQ84DzkOOQ84DxUOOQ8UDxUOFQ8UDxQPFQ4VDxQPFA8VDhUPFA8UDxUOOQ84EDgPOBA4DzcQOA85D62Okw84DxQPOQ84DxUOFQ45DxQPFQ45DxQPFQ45DzgPFQ45DzgPFA85DzgPOQ45DzgPOQ8UDzgPFQ4VDxQPFA8VDhUPFA8UDxUOFQ8UDxQPFQ4VDzgPOQ45DzgQOA84DzkOOQ8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 18 */ "JgDMAAZ0jZMPOA8UDzkPOBATDxUOOQ8UDxUOORATDxUOOQ84DxQPOQ84DxQPOQ84DzkOOQ84DzkOFQ84DxUOFQ4VDxQPFQ4VDhUPFA8VDjkPFA8UDxUOFQ84DzkOOQ8UDzkOOQ84EDgPrY6TDzgPFQ45DzcQFQ4VDzgPFQ4VDjkPFA8VDjkQNw8VDjkPOA8VDjkPOA85DjkPOQ45DxQPOBISDhUPFA8UDxUOFQ8UDxUPFA45DxQPFQ4VDxQPOA85DzgPFQ45DzgPNxA5DwANBQAAAAAAAAAAAAAAAA==",
        /* 19 */ "JgDKAI6SDzkPFA85DjkPFA8UDzkOFQ8UDzkOFQ8UDzgPOQ8UDzgPOQ8UDzgQOA84DzkOOQ84DxUOOQ8UDxUOFQ8UDxQPFQ4VDhUPOA85DhUPFA8VDhUPOA85DhUPFA84DzkPOA85Dq6Okw84DxQPOQ84DxQPFQ45DxQPFQ45DxQPFA85DzgPFA85DzgPFQ45DzgPOQ45DzgPOQ4VDzgPFQ4VDxQQEw8VDhUPFA8VDjkPOA8UDxUOFQ8UDzkPOA8UDxUOOQ84DzkOOQ8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 20 */ "JgDOAAsAA8uOkw45DxQPOQ45DxQPFA85DxQPFA85DhUPFA85DzgPFA85DjkPFA85DjkPOA85DjkPOA8VDjkPFA8VDhUPFA8UDxUOFQ8UDzkOFQ4VDxQPFQ4VDzgPOQ4VDzgPOQ45DzgPOQ6ujpMPOA8VDjkQNxAUDhUPOA8UDxUOOQ8UDxUOOBA4DxUOOQ84DxUOOQ84DzkPOA85DjkPFBA4DhUPFA8UDxUOFQ8UDxQPFQ45DxQPFA8VDhUPFA85DjkPFA85DjkQNw85DjkPAA0FAAAAAAAAAAAAAA==",
        /* 21 */ "JgDKAI2TDzkPFA84DzkOFQ8UDzgPFQ4VDzgPFQ4VDzgPOQ4VDzgQOBATDzgPOQ45DzgQOA84DxQPOQ4VDxQPFQ4VDhUPFA8UDzkPOA8VDhUOFQ8UDxUOOQ8UDxQPOQ45DzkOOQ84D66Nkw85DxQPOA84EBIRFA83EBUPFA85DhUPFA84DzkPFA85DjkPFA84DzkPOA85DjkPOA8VDjkPFA8VDhUOFQ8UDxUOFQ45EDcPFQ4VDxQPFQ4VDjkPFA8VDjkPOA85DzgPOA8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 22 */ "JgDKAI6TDjkPFA84DzkPFA8UDzkOFQ8UDzkOFQ8UDzkPOA8UDzkOOQ8UDzkOOQ84DzkOOQ84EBQOOQ8UDxUOFQ8UDxQPFQ4VDzgPOQ45DxQPFQ4VDhUPOA8VDhUPFA85DjkPOA85Dq6Okw84EBQOOQ84DxUOFQ45DxQPFQ45DxQPFA85DzgPFA85DzgPFA85DzgPOQ45DzgQOA4VDzgPFQ4VDxQPFA8UDxUPFA85DjkPOA8VDhUOFQ8UDzkOFQ8UDxQPOQ45EDgOOQ8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 23 */ "JgDKAI6TDzgPFA85DzgPFA8UDzkOFQ8UDzkOFQ8UDzkOORATDzkOOQ8UDzkOOQ84EDgOOQ84DxUOOQ8UEBQOFQ8UDxQPFQ4VDzgQFA45DxQPFQ4VDhUPOA8VDjkQEw85DjkPOA85Dq6Okw84DxUOORA3DxUOFQ84DxQPFQ45DxQPFQ45DzgPFQ45DzgQFA45DzgPOQ45DzkPOA8UDzkOFQ4VDxQPFQ4VDxQPFA85DhUPOA8VDhUOFQ8UDzkOFQ84DxUOOQ84DzkOOQ8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 24 */ "JgDKAI2TDjkPFA85DjkPFA8VDjkPFA8UDzkPFA8UDzkOOQ8UDzkOOQ8UDzcQOQ84DzkPOA85DhMROA8TEBUOFQ8UDxQPFQ4VDzgPFQ4VDxQPFA8VDhUPOA8VDjkPOA85DjkPOA85D62OkxA3DxUOOQ84DxUOFQ84DxUOFQ84DxQPFQ45DzgPFQ45DzkOFQ45EDgOOQ84DzkOOQ8UDzkOFQ8UDxQPFQ4VDxQPFA85DxQQEw8VDhUPFA8UDzkOFQ84DzkOOQ85DjkPOA8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 25 */ "JgDKAI2TDzkOFQ84DzkPFA8UDzkOFQ8UDzgQFA4VDzgQOA4VDzgPOQ4VDzgPOQ45DzgPOQ84DxQPOQ8UDxQPFQ4VDxQPFA85DjkQEw8VDhUPFA8UDxUOFQ8UDzkOOQ84DzkOOQ84D66Okw45DxQPOQ45DxQPFA85DxQPFA85DhUPFA83EDkPFA85DjkPFA85DjkPOBA4DjkQNw8VDjkPFBAUDhUOFRATDxUOOQ84EBQOFQ4VDxQPFQ4VDhUPFA85DjkPOA85DzgPOQ4ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 26 */ "JgDKAI2TDzkOFQ84EDgPFA8UDzgPFQ4VDzgQFA8UDzgQOA4VDzgPOQ8UDzgQOA84DzgQOA45EBMPOQ4VDxQQFA4VDxQPFA85DjkPFA85DhUPFA8UDxUOFQ8UDzkPFA84EDgOOQ84D66Okw45EBMPOQ45DxQPFA85DxQPFA85DhUPFA85DjkQEw85DjkPFA85DjkPOA85DjkQNxAUDzgPFA8VDxQPFA8UDxUOOQ84DxUOOQ8UDxUOFQ8UDxQPFQ45DxQPOQ45DzgQOA4ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 27 */ "JgDQAAcACZoHWI2TDzkPFA84DzkPFA8UDzkOFQ8UDzkOFQ8UDzkOOQ8UDzkOOQ8UDzkOOQ84DzcQOQ84DxUOOQ8UDxUOFQ8UDxQPFQ45DxQPFQ45DxQPFA8VDhUPFA85DjkPFA85DjkPOA85Dq6Okw84DxUOOQ84DxUOFQ84DxUOFQ45DxQPFQ45DzgPFQ45DzgPFQ45DzgPOQ45DzgPOQ8UDzgPFQ4VDxQPFA8VDhUPOA8VDhUPOA8UDxUOFQ8UDxQPOQ45DxQPOQ45DzkOOQ8ADQUAAAAAAAAAAA==",
        /* 28 */ "JgDKAI2TDzkPFA84DzkPFA8UDzkOFQ8UDzkOFQ8UDzgPOQ4VDzgPOQ8UDzgPOQ84DzkOOQ84DxUOOQ8UDxUOFQ4VDxQPFQ45DxQPFA8VDhUPFA8UDxUOFQ84DzkOOQ84DzkPOA85Dq6Okw84DxQPOQ84DxUOFQ45DxQPFQ45DxQPFQ45DzgQFA45DzgPFQ45DzgPOQ45DzgPNxAVEDcQFA4VDxQPFA8VDhUPOA8UDxUOFQ8UDxUOFQ8UDxQPOQ45DzgPOQ84DzgPOQ8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 29 */ "JgDKAI6TDjkPFA85DjgQFA8UDzkOFQ8UDzkOFQ8UDzkOOQ8UDzkOOQ8UDzkOOQ84DzkOOQ84DxUOOQ8UDxUOFQ4VDxQPFQ45DxQPOA8VDhUPFA8VDhUPFA84DxUOOQ84DzkPOA85Dq6Okw84EBMPOQ84DxQPFQ45DxQPFQ45DxQPFA85DzgPEhE5DzgPFQ45DzgPOQ45DzgQOA4VDzgPFQ4VDxQPFA8VDhUPOA8UDzkPFA8UDxUOFQ8UDxQPOQ4VDzcQOQ84DzkOOQ8ADQUAAAAAAAAAAAAAAAAAAA==",
        /* 30 */ "JgDKAI2TDzkOFQ84DzkOFQ8UDzkOFQ4VDzgPFQ4VDzgPOQ4VDzgPOQ4VDzgPOQ43ETgPOQ45DxQPOQ4VDxQPFQ4VDxQPFA85DhUPOA85DhUPFA8VDhUOFQ84EBQOFQ84DzkOOQ84EK2Okw45EBMPOQ45DxQPFA85DxQPFA85DhUPFA85DjkPFA85DzgPFA85DjkPOA85DjkPOA8VDjkQEw8VDhUPFA8UDxUOOQ8UDzkOOQ8UDxQPFQ4VDxQPOA8VDhUPOBA4DzgPOQ8ADQUAAAAAAAAAAAAAAAAAAA==",
    ],
};
