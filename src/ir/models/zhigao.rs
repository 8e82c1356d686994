//! Zhigao units.

use super::ModelCodes;

pub(super) const CODES: ModelCodes = ModelCodes {
    name: "Zhigao Thermostat",
    min_temperature: 16,
    max_temperature: 30,
    off: "JgDIAMXzEjcUNRU0FDUVNBU0FTQTORQPFBAUEBUPEhISEhQQFBAVNBU0EzYTNhI3EjcROBI3EhAUEhISFBAUEBQQFBAVDxU0ETgSNxI3EjcSNxQ1FDUVDxQQEhISEhISEhIUEBQQFTQUNRUPEzYSNxI3ETgROBISEhISNxISFBAUEBQQFQ8VDxM2EjcSEhE4ETcTNxI3EjcSEhQQFDUVDxQQFBASEhISETgRExI3EhISNxQQFQ8UNRQQFTQUEBM2ExESNxE4EvMSAA0F",
    heat: &[
        /* 16 */ "JgDIAMfxFDUUNRQ1FDUUNRM2EjYSNxISEhITEhISFBAUEBQQFw8UNRQ0FDYSNxM2FDUUNRQ1FBAUEBQQFBAUEBUPERISEhMSEhIUNRQ1FDQVNRQ1FDUTNhI3ERISEhISEhISEhMSFDUUEBQQFDUSNhI3EjcSNxISFjQTNhMSExAUEBQQFQ8TNhM2EjcSNhI3EjcSNhMSExISEhQQFBAUEBQQFBAUNRISETcSEhI3EhISOBISExEUNBUQFDUUEBQ1ExESNhI3EvMSAA0F",
        /* 17 */ "JgDIAMfyFDUSNxI2EjcSNxI3EjcUNRUPFQ8VEBQQFBATERMREhESNxI3EjcWMxU1FDUUNBQ2EhISERISEhISEhISEhIVDxU0FRAUNRQ1FDUSNhM2EjcSEhI3EhIUEhISEhISEhISFTQVEBQPFTYVNRQ1FDUSNhMREjcSNxISEhISEhcPFBAUEBQ1EzQUNxM2FDUVMRgPFTQTERUPFQ8VDxUQERISNxISEjcSEhU0FQ8VNRQQFBATNhIREjcSEhI3EhISNxQ1FfAVAA0F",
        /* 18 */ "JgDIAMfxFDUTNhI2EjcSNxI3EjcSNxMRFRAUEBQQFBAUEBQQExESNhI3EjcSNxI3EjcUNRU0FRAUEBQQFBATERISEhESEhI3EhISNxM2FTQVNRQ1FDUUEBM2EhISERISEhISEhISEzYVDxUPFTUUNRQ1FDUUNRISEjYSNxISFBAVEBQQFBAUNRQQFDcTNhI3EjYSNxISEhISNxISFBEUEBQQFBAUNRQQEzYSERI3EhITNhUPFRAUNBUQFDUUEBM2EhIRNxI3EvMSAA0F",
        /* 19 */ "JgDIAMTzEjcSNxU0FTQVNBU1FDUTNRMREhISEhISEhISEhQREhISNxE3EjcSNxU0FTQVNBU0FRATERISERISEhISEhISEhI3FBIRNxQ1FTQVNBU0FTQVEBI2ExESEhIUFBAUEBQQEjYSEhISEjkVNBU0FTUUNRISETcSNxISFQ8VDxUPFRIUEBISETcSNxI3EjcSNxISFTQVNBUQFA8VDxUQFBATNRISEjoREhI3EhISNxISFBAVNBUPFTQSEhI3EhISNxQ1FfAVAA0F",
        /* 20 */ "JgDIAMT0EjcSNxI3EjcUNRQ1FTQVNBUPFBATERISERMSEhISFQ8VNBQ2FDQVNBI3EjcSNxI1FRESEhISEhISEhQQFBEUEBU0FQ8VNBU0EzYTNhI3ETgSEhI3EhISEhISFBAUEBUPFTcTEBQQFDUVNBU0FDUTNhISETgSNhMTFQ8UEBQQExEVNBQ1FREROBI3EjcSNxISFBAVDxU0FQ8TERMRERMROBISEjcSEhI3FBAVNBQQFQ8VNBQQEzYSEhE4EhISNxI3EvMUAA0F",
        /* 21 */ "JgDIAMTzEjcSNxI3EzYVNBU1FDUVMhYQFBATERISERISEhISEhISNxM2FDYUNBU0FTUUNRQ1ExESEhETERISEhISEhIUERQ0FRAUNRQ1FDUUNRM2EjYSEhI3EhISEhMRFRAUEBQQFDUTEBUQFDUUNRQ1FDUTNhISETcSNxISEhITERQRFBAUEBQ1FBAUNRQ1EzYSNhISEjcSEhI3FBEUEBQQExETNhISFDUUEBQ1FBATNhITExAVNRQQFDUUEBQ2ERISNxI3EvMUAA0F",
        /* 22 */ "JgDIAMjwFTQVNRU0FDUSNxE4EjcSNxISEhITERUPFQ8UEhMQFQ8VNBU0FTQVNBI3EjcROBI3FQ8VDxQQExEVDxUPFQ8VDxQ1EhIROBE4EjcSNxI3EjcVDxU0FQ8VDxUPExETERETETgSEhUPFDUVNBU0FTQUNhQPFTQVNBUPFQ8TERISERMSNxISEhISNxI3EjcUNRUPFQ8VNBU0FBATERISERMROBISEjcSEhI3FBAVNBUPFQ8VNBUPFTQTERU0FQ8VNBI3EvMSAA0F",
        /* 23 */ "JgDIAMfwFTQVNRQ1FTQVNBU1FDUTNBQSERISEhISEhISEhQQFQ8VNhU1FDMWNRQ1EzYSNhI3EhISEhYPFBAUEBQQEhIUEBQ1FBAUNRM2EjYSNxI3EjcSEhI3EhIVDxUPFRAUEBQQFDUTERIREjcSNxI3EjYTNxQQFTQVNBUQFBAUDxUQFBAUEBQQEhISNhI3EjcSNxISFDUVNBU0FQ8VEBQQFBAUNRISEjYSEhI3EhISNxISFQ8VNBUQFDUUEBQ1ExESNhI3EvMSAA0F",
        /* 24 */ "JgDIAMfwFTQVNBU0FTQUNRI3EjcSNxISEhISEhUPFQ8VDxUPFQ8UNRM2EjYTNxI3EjcSNxI3FBAVDxUPFQ8VDxUPExESExE3EhISNxI3EjcUNRU1EjcSEhI3EhISEhMRFREVDxMREjcSEhISEjcSNxI3FTQVNBUPFTQVNBUPFBASEhISEhISNxI3EjcVDxU0FTQVNBUPFBATERISEjcSEhISEhISNxISEjcSEhI3EhISNxUPFQ8VNBUQFDQVDxQ1ExESNxI3EvUSAA0F",
        /* 25 */ "JgDIAMjwFTQUNRM2EjcROBI3EjcSNxISFQ8VDxUPFQ8VDxUPExESNxE4EjcSNxI3EzYVNBI3EhISEhISEhISEhISFQ8VDxM2FBATNhE4ETgSNxI3EzgSEhI3EhITERUPFQ8WEBUPFTQVDxMREjcROBE4EjMWNxISEzYVNBQQFQ8VDxUPFQ8TERI3ETgRExI3EjcSNxISFTQVDxUPFTQVDxQQFBASNxETETgSEhI3EhITNhUQERITNhUPFTQVDxU0FQ8VNBM2E/ITAA0F",
        /* 26 */ "JgDIAMTzEjcSNxI3FTMWNBU0FTUUNBUQExESEhESEhISEhISEhISNxQ3ETcSNxI3EjcSNxU0FQ8VDxUPFRAVDxUPFRAUEBQ1EhIRNxY2EjYSNxI3EjcSEhI3FQ8VDxUPFRAUEBQREjYSEhISEjcSNxczFTUUNRQQEjcVMxUPFRAUEBMREhIRNxcPFTQVDxU0FTUUNRMRERISNxISEjcSEhQSEhISNxISEjcVDxU0FQ8VMBkQFBASNxIREjkSEhI3EhISNxI3FfAVAA0F",
        /* 27 */ "JgDIAMT0EjMWNxI3EjcTNhU0FDUVNBUPFBATERISERMSEhIUEhIROBI3EjcSNxE4ETgSNxI3EhIVDxIREhMRExUPFQ8TERM2EhIROBI3EjcSNxI3FDUVDxU0FQ8VDxQQEhIRExETEjcSEhISEjcSNxI3FTQVNBUQEzUVNBMRERMSEhISEhISEhQQFTQVDxU0FTQVNBUPFTQVNBUPFDUSEhETEhISNxISEjcTERU0FBAVNBUPFQ8TNhISETgRExI3EhISNxI3FfAVAA0F",
        /* 28 */ "JgDIAMTzFTUSNhI3EjcSNxI3EjcUNRUPFRAUEBQQFBAUEBQQExERNxI3EjcSNxI3EzYVNBU1FBAUEBQQFBATERESFg8UEBQ1FBAUNRM2EjYSNxI3EjcSEhI3FQ8VEBQQFBAUEBQQEzYSERISEjcSNxI3EjcVNBUQFDQVNRQQEhESEhISEhIVNBU0FRAUEBQ1FDUUNRMREhESEhI3EjcSEhISExEVNBUQFDUUEBQ1FBATNRMRExEUNRUPFTQVEBQ1ExESNxI3EvMSAA0F",
        /* 29 */ "JgDGABU0FTQTORQ0FTQUNRM2EjcSEhISEhISEhISFQ8VDxUPFTQVNBQ1EzYSNxI3EjcSNxISEhIUEBUPFQ8VDxUPFQ8UNRMREjcSNxI3EjcSNxI3FBAVNBUPFBAVDxUPFBASEhE4EhISEhI3EjcSNxU0FTQVDxU0FTQVDxMRExESEhISEhISNxISEhIVNBU0FTQVEBQ0FQ8VNBQ1EhIRExISEjcSEhU0FQ8TNxQPFTQVDxUPFTQVDxM2EhIROBISEjcSNxLzEgANBQAA",
        /* 30 */ "JgDIAMTzFTQVNBU1FDQVNRQ1EzYSNhISEhISEhISEhIUEBUPFRAUNRI2EjcSNxI3EjcTNhU0FRAUEBQQFBAUEBQQEhISERI3EhISNxI3EjcSNxU0FTQWEBQ0FRATERMRERISEhISFTYSEhISFTQVNRQ1FDUUNRQQEzYSNxESEhISEhITFBATNRMSERISEhI3EjcSNxQQFQ8VNBU0FTUUEBQQExESNhISEjcSEhI3EhIWNBQQFBATNhMRETcSEhI3EhISNxI3FfAVAA0F",
    ],
    cool: &[
        /* 16 */ "JgDIAMbxFTQVNBU0FTQUNRI3EjcSNxISEhISEhISFBAVDxUPExESNxI3FDUSNxQ1FTQVNBU0FQ8UEBUPFQ8VDxUPFBASEhISEhISNxI3EjUUNxM2FTQVMxY0FQ8VDxUPEhISEhISEjcSEhQQFTQVNBU0FTQTNhISEjcSNxISEhMVDxUPFQ8TNhE4EjcSNxI3EhISNxQ1FQ8VDxUPFQ8TERM2EhISEhISEjcSEhI3ExEVNBUPFQ8VNBUPFTQUEBUzExISNxI3EvMSAA0F",
        /* 17 */ "JgDIAMXzEjcSNxM2FDUVNBI3EjcVNBISERMRExISEhISEhMRFQ8UNRU0FDUUNRM1EzcROBE4EhISEhISEhIUEBUPFBAUEBQ1EhISNxE4ETgSNxI3EjcSEhQ1FBAVDxUPFBAVDxQQEzYSEhISETgSNxI3EjcTNhQQFDUVNBUPFBATERISERMRExI3EjcSNxI3FBAUNRQ1FDUVDxUPExESEhE4ERMSEhISEjcSEhQ1FRAUNRUPFQ8UNRISEjcRExI3EhISNxI3FvAUAA0F",
        /* 18 */ "JgDIAMfxFzQUNRU0FDUTNhI2EjcSOBESEhMVDxMREhESEhITFQ8UNRM2EjYSOBM2FDUTNxI3EhMRExISFBAUEBMTERMSEhQ1FBAUNRU0FDUUNRM1EzYTEhI4ERMTERQQFBAUEBUPFzQUEBMREjcSNhI3EjcSNxITEjcTNhQQFBAUEBUPERITNxMRFDUUNRU0FQ8UNRQ1EhIRNxISEhISEhI4EhIUEBQQFDUVDxQ1FBASNhISEhMSNxQQFDUUEBQ1FBAUNRM2EvISAA0F",
        /* 19 */ "JgDIAMjwFDUTNhI3ETgSNxI3EjcSNxISFBAVDxUPFRAREhUPFQ8UNRU0FTQUNRM2EjcSNxI3EhISEhMRFBAVDxQQFBAVDxM2EhISNxI3EjcSNxI3EjcUEBQ1FRATEBQQFQ8VDxUQEjcSEhISFDUVNBU0FTQVNBQQEzYSNxETEhISEhISEhIVDxUPFDUVNBU0ExESNxE4EjcSNxISEhITERQ1FQ8VDxUPFTQUEBI3EhIVNBUPFQ8VNBMREjcRExI3EhISNxI3EvMUAA0F",
        /* 20 */ "JgDIAMTzEjcSNxQ1FTQVNBU1FDUUNRMREhISEhESEhISEhISEhIbNxI3EjcSNxI3EjcVNBU0FRAUEBQQFBASEhIREhISEhI3EhETNxQ1FTQVNBU1FDUUEBM2EhIREhISEhISFBMREjcSERISEjcSNxY0FTQVNRQQEzYRNxISEhISEhUPFQ8VNhU1FBAUNRI2EhISNxI3EhISEhI3FQ8VERQ0FRAUEBQREjYSEhE3EhISNxYOFQ8VNBUQFDUUEBI3EhIRNxI3EvMSAA0F",
        /* 21 */ "JgDIAMT0EjcUNRI3EjcVNBQ1FTQVNBUPFBATERISERMRExISEhISNxQ1FTQVNBQ1FTQUNRM2EhIRExETERMSEhISFBATERI3ERMSNxE4ETgSNxI3EjcUEBQ1FBAUEBUPFRASEhISETgRExISEjcVNRU0FDUVNBUPEjcSNxISEhIUEBQQFBAWEBI3ERMROBI3EhIWNBM2EjcRExE4EhIRExE4EhISEhISFTQUEhI3EhITNhQQFQ8VNBUPFTQUEBI2ExIROBE4EvMSAA0F",
        /* 22 */ "JgDIAMjwFTUUNRQ1EjYTNhI3EjcSNhMSEhIVDxUQFBAUEBQQFBATNhI2EjcSNxI3EjcSNxU0FRAUEBQQFBAUEBMQExIREhI3EhISNxI3EjcVNBU1FDQVEBQ1FBATERESEhISEhISEjcSEhUQFDQVNRQ1FDUUNRMREjYTNhISEhISEhISEhMSNhISEhISNxI3EhIVNBU0FRAUMxY1ExETEBM2EhISEhISEjcSEhM2FQ8VNRQQFBAUNRQQFDUUEBQ1EhISNhI3EvMSAA0F",
        /* 23 */ "JgDIAMjwFDUTNhI3ETgSNxI3EjcSNxISFQ8VDxUPFQ8UEBUPFBAVNBQ1EzYSNxI3EjcSNxI3EhITERUPFRAREhUPFQ8VDxI3EhISORQ1EzYSNxI3EjcSEhI3EhITERUPFQ8VERETEjcSEhISEjcSOBU0FTIXNBQQFTQSNxISEhISEhISEhISEhMRFBAVNBU0FQ8UNRM2EjcSNxI3EhISEhI3ExEUEBUPFDUUEBQ1ExESNxISFBASNxISEjcSEhI3EhITNhQ1FfAUAA0F",
        /* 24 */ "JgDIAMXzEjcSNxI3EjcVNBU0FTQVNBUPFRARExETERISEhISEhISNxM2FTQVNBU0FTQVNBQ2ERISEhITERMREhISEhISEhI3EhIUNRU0FTQVNBU0FTQUERE3EhISEhISEhISEhISFTQVDxUPFTQVNBQ2ETgRNxISEjcSNxISEhIVDxUPFQ8VNBU0FTQVEBQ0FQ8VNRE2ExISEhISEjcVDxU0FQ8VDxUPFTURExE3EhISNxISEhISNxMRFTQVDxU0FQ8VNBQ2EfQRAA0F",
        /* 25 */ "JgDIAMbzEjcUNRQ1FDUVNBU0EzYSNxIREhISEhITERMSEhISERISNxI3EjgSNxM2FDUUNRQ1FBASEhISERISEhITERMSEhI3Fg8UNRU0FTQUNRI2EjgSEhM2FBAUEBMSERISEhISEjcSEhMSFDUUNRQ1ETcSNxcQFDUUNRQQEhIRExESFxAUEBI2EjcSEhI3ExISOBI3EzYUEBQQFTUUEBM2EhIREhISEjcSExI3ExEUNRQQFBAXNBQQEzUSEhI3EhIXNBQ1FfAUAA0F",
        /* 26 */ "JgDIAMb0ETcSNxI3EjcSNxI3FDUVNBUPFQ8VDxQQEhISEhISEhISNxI3EjcVNBU0FTQVNBU0FBASEhISEhISEhISEhISEhU0FQ8VNBU0FTQVNBM2EjcSEhI3EhISEhISEhIUEBUPFTQVDxUQFTQVNBI3EjcSNxISEjcSNxISFBAVEBESEhIVNBUPFTQVDxU0FBATNBc0FQ8VNxESEjcSEhI3EhIVDxUREzYSEhI3EhISNxITFQ8VNBQQFTMWDxQ1ExISNxI3EvMSAA0F",
        /* 27 */ "JgDIAMTzEjcSNxI3EjcUNRU0FTQVNRQQFBATERISERISEhISEhISNxI3FTQVNBU0FTUUNRQ1ExESEhESEhISEhISExIREhI3EhISNxI3EjcVNBU0FTQVEBQ1FBAUEBIREhISEhISEjcSEhQQFTQVNBU0FTQVNBQREzYSNhISFQ8VEBQQFBAUEBISETcSEhI3EhISNxI3FTQVNBUPFTQVEBQ1ExESERISEjcSEhI3EhISNxUPFQ8VNBUQFDUTERI3EhESNxI3EvQRAA0F",
        /* 28 */ "JgDIAMbzEjcSOBI3FDUUNRQ1FDUVMhYQExESEhETERISExETEhITNhQ1FTQUNRQ1FDUTNhI2EhISExESEhMSEhMRFBAUEBQ1FBAUNRM2EjYSNxI3EjQVExI3EhIUEBQQFBAUEBQQEzYSEhISETcSOBE4EjcSNxQQFDUUNRUPFBATERIREhMRNxI3EhMSEhE4EhITNhQ1FBEUDxU0FDUTERI2ExESEhITETgRExI3FBAUNRUPFBAUNRQREjYUEBQ1FBAVNBQ1FPESAA0F",
        /* 29 */ "JgDIAMXzEjcUNRQ1FTQUNRQ1FDQTNxISERMRExISEhISEhQQFBAUNRU0FDUTNhI3ETgROBM2EhIRExETEhISEhISFBAUEBI3EhIROBE4EjcUNRQ1FDUUEBU0FQ8UERIREhIRExETETYUEhISEzYUNRQ1FTQVNBUPFTQTNhISERMRExQQFBAUEBM2ExESEhE4ERMROBI3EjgSEhI3FDUUEBQzFw8VDxMREjcSEhE4ExISNxISEhIUNRQQFDUVDxQ1FBETNRU0FPMRAA0F",
        /* 30 */ "JgDIAMjxFDUUNRM2EjYSNxI3EjcSNxISFBAVDxUQFBAUEBQQEhISNhI3EjcSNxI3EjcSNxU0FQ8VEBQQExETERISEhESEhI3EhISNxI3FTQVNBU0FTQVDxU0FRASEhIREhISEhISEjcSEhQQFTQVNBU1FDUUNRISEjYSNxISEhISEhISFBAVNBUQFBAUEBQ1ExESNxI2EhISNxI3EjcSEhU0FQ8VEBUQFDUTERI3ERISNxMRFQ8VNBUQFDUUEBQ1EhISNhI3EvMSAA0F",
    ],
};
